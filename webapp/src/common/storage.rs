use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{SessionStorage, Storage};

use serde::{Deserialize, Serialize};

// preferences only live as long as the browser tab, so everything here goes through
// session storage rather than local storage
pub fn set_session_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("folio_{}", key);

    SessionStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set session storage {key}: {err}")))
}

pub fn get_session_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("folio_{}", key);

    SessionStorage::get(key.clone()).map_err(|err| {
        anyhow::Error::msg(format!("Session storage failure for {key}: {err}"))
    })
}

// a missing key is the normal case on first load, so it is not worth a console error
pub fn try_session_storage<T>(key: &str) -> Option<T>
where
    T: for<'a> Deserialize<'a>,
{
    get_session_storage(key).ok()
}
