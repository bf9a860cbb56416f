pub mod prefs;
pub mod storage;
pub mod style;
