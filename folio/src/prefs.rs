use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

// visual presentation mode
//
// the webapp mirrors this onto the document element as data-theme, which is what the
// stylesheet keys its dark overrides on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// anything we do not recognize (stale storage, hand-edited values) falls back to the default
impl From<String> for Theme {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    // BCP 47 tag, also used as the lang attribute
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::Ar => Direction::Rtl,
        }
    }

    /// Label for the header button, i.e. the language a click switches *to*.
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::En => "ع",
            Self::Ar => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "ar" => Self::Ar,
            _ => Self::En,
        }
    }
}

// Preferences
//
// the two independent toggles that every page reads.  there is exactly one of these per
// running ui; the webapp wraps it in a signal and hands it down through context, so the
// toggle methods below are the only way either field ever changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    theme: Theme,
    language: Language,
}

impl Preferences {
    pub fn new(theme: Theme, language: Language) -> Self {
        Preferences { theme, language }
    }

    /// Rebuild preferences from previously stored raw values, clamping anything
    /// missing or unrecognized to the defaults.
    pub fn restore(theme: Option<String>, language: Option<String>) -> Self {
        let prefs = Preferences {
            theme: theme.map(Theme::from).unwrap_or_default(),
            language: language.map(Language::from).unwrap_or_default(),
        };

        debug!(theme = %prefs.theme, language = %prefs.language, "restored preferences");
        prefs
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "toggled theme");
        self.theme
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        debug!(language = %self.language, "toggled language");
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_light_and_english() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.language(), Language::En);
        assert_eq!(prefs.direction(), Direction::Ltr);
    }

    #[test]
    fn test_toggle_theme_twice_returns_to_start() {
        let mut prefs = Preferences::default();

        assert_eq!(prefs.toggle_theme(), Theme::Dark);
        assert_eq!(prefs.theme(), Theme::Dark);

        assert_eq!(prefs.toggle_theme(), Theme::Light);
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn test_even_number_of_toggles_is_identity() {
        for start in [
            Preferences::new(Theme::Light, Language::En),
            Preferences::new(Theme::Dark, Language::Ar),
        ] {
            for n in (0..10).step_by(2) {
                let mut prefs = start;
                for _ in 0..n {
                    prefs.toggle_theme();
                    prefs.toggle_language();
                }
                assert_eq!(prefs, start);
            }
        }
    }

    #[test]
    fn test_toggle_language_leaves_theme_alone() {
        let mut prefs = Preferences::new(Theme::Dark, Language::En);

        assert_eq!(prefs.toggle_language(), Language::Ar);
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.direction(), Direction::Rtl);
    }

    #[test]
    fn test_toggle_theme_leaves_language_alone() {
        let mut prefs = Preferences::new(Theme::Light, Language::Ar);

        prefs.toggle_theme();
        assert_eq!(prefs.language(), Language::Ar);
        prefs.toggle_theme();
        assert_eq!(prefs.language(), Language::Ar);
    }

    #[test]
    fn test_restore_clamps_unknown_values() {
        let prefs = Preferences::restore(Some("purple".to_owned()), Some("fr".to_owned()));
        assert_eq!(prefs, Preferences::default());

        let prefs = Preferences::restore(None, None);
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_restore_accepts_stored_values() {
        let prefs = Preferences::restore(Some("Dark".to_owned()), Some(" ar ".to_owned()));
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.language(), Language::Ar);
    }

    // the webapp stores each value as json and reads it back as a plain string
    #[test]
    fn test_stored_values_restore() {
        let theme: String =
            serde_json::from_str(&serde_json::to_string(&Theme::Dark).unwrap()).unwrap();
        let language: String =
            serde_json::from_str(&serde_json::to_string(&Language::Ar).unwrap()).unwrap();

        assert_eq!(theme, "dark");
        assert_eq!(language, "ar");
        assert_eq!(
            Preferences::restore(Some(theme), Some(language)),
            Preferences::new(Theme::Dark, Language::Ar)
        );
    }

    #[test]
    fn test_direction_follows_language() {
        assert_eq!(Language::En.direction().as_str(), "ltr");
        assert!(Language::Ar.direction().is_rtl());
    }

    #[test]
    fn test_switch_label_names_the_other_language() {
        assert_eq!(Language::En.switch_label(), "ع");
        assert_eq!(Language::Ar.switch_label(), "EN");
    }

    #[test]
    fn test_display_matches_attribute_values() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Language::Ar.to_string(), "ar");
        assert_eq!(Theme::Light.css_class(), "theme-light");
    }
}
