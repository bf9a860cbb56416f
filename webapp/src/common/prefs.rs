use std::sync::Arc;

use dioxus::prelude::*;
use gloo_console::error as console_error;
use tracing::error;

use folio::{
    Bilingual, Key, Language, Preferences, Theme,
    config::{SiteConfig, read_config},
    translate,
};

use crate::common::storage::{set_session_storage, try_session_storage};

const THEME_KEY: &str = "theme";
const LANGUAGE_KEY: &str = "language";

const SITE_TOML: &str = include_str!("../../site.toml");

// PrefStore
//
// the handle every component uses to read and flip the theme and language.  it is created
// once in App and passed down through context; reading through it subscribes the calling
// component, so a toggle re-renders exactly the components that display either value
#[derive(Clone, Copy, PartialEq)]
pub struct PrefStore {
    inner: Signal<Preferences>,
}

impl PrefStore {
    pub fn snapshot(&self) -> Preferences {
        *self.inner.read()
    }

    pub fn theme(&self) -> Theme {
        self.inner.read().theme()
    }

    pub fn language(&self) -> Language {
        self.inner.read().language()
    }

    pub fn t(&self, key: Key) -> &'static str {
        translate(key, self.language())
    }

    pub fn text(&self, text: Bilingual) -> &'static str {
        text.get(self.language())
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.inner.write().toggle_theme();
        set_session_storage(THEME_KEY, theme);
    }

    pub fn toggle_language(&mut self) {
        let language = self.inner.write().toggle_language();
        set_session_storage(LANGUAGE_KEY, language);
    }
}

// stored values are read back as raw strings so that anything unexpected clamps to the
// default instead of failing to deserialize
pub fn use_pref_store_provider() -> PrefStore {
    let inner = use_signal(|| {
        Preferences::restore(
            try_session_storage::<String>(THEME_KEY),
            try_session_storage::<String>(LANGUAGE_KEY),
        )
    });

    use_context_provider(|| PrefStore { inner })
}

pub fn use_prefs() -> PrefStore {
    use_context::<PrefStore>()
}

pub fn use_site_config_provider() -> Arc<SiteConfig> {
    use_context_provider(|| {
        let config = read_config(SITE_TOML).unwrap_or_else(|err| {
            error!("falling back to built-in site config: {err:#}");
            SiteConfig::default()
        });
        Arc::new(config)
    })
}

pub fn use_site_config() -> Arc<SiteConfig> {
    use_context::<Arc<SiteConfig>>()
}

// mirror the preferences onto <html> so the page background and scrollbars follow the
// theme, and so the browser lays the whole document out in the right direction
pub fn apply_document_attributes(prefs: Preferences) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let attributes = [
        ("data-theme", prefs.theme().as_str()),
        ("dir", prefs.direction().as_str()),
        ("lang", prefs.language().code()),
    ];

    for (name, value) in attributes {
        if let Err(err) = root.set_attribute(name, value) {
            console_error!(format!("Failed to set {name} on document: {err:?}"));
        }
    }
}
