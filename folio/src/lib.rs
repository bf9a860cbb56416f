pub mod config;
pub mod contact;
pub mod i18n;
pub mod portfolio;
pub mod prefs;

// the handful of types every page touches
pub use i18n::{Bilingual, Key, translate, translate_str};
pub use prefs::{Direction, Language, Preferences, Theme};
