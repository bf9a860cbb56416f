use tracing::warn;

use crate::prefs::Language;

// Bilingual
//
// a pair of static strings, one per supported language.  the shared table below is built
// from these, and pages use them directly for copy that only appears in one place
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Bilingual { en, ar }
    }

    // for strings that do not change between languages (names, numbers, urls)
    pub const fn same(text: &'static str) -> Self {
        Bilingual { en: text, ar: text }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

macro_rules! translation_keys {
    ($($variant:ident => $name:literal,)+) => {
        /// Symbolic identifiers for strings shared across pages.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Key {
            $($variant,)+
        }

        impl Key {
            pub const ALL: &'static [Key] = &[$(Key::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Key::$variant => $name,)+
                }
            }

            pub fn parse(name: &str) -> Option<Key> {
                match name {
                    $($name => Some(Key::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

translation_keys! {
    Home => "home",
    Portfolio => "portfolio",
    About => "about",
    Services => "services",
    Contact => "contact",
    Title => "title",
    Subtitle => "subtitle",
    HeroTitle => "heroTitle",
    HeroSubtitle => "heroSubtitle",
    SeeMyWork => "seeMyWork",
    HireMe => "hireMe",
    PortfolioTitle => "portfolioTitle",
    PortfolioSubtitle => "portfolioSubtitle",
    ViewProject => "viewProject",
    AboutTitle => "aboutTitle",
    Experience => "experience",
    Education => "education",
    Skills => "skills",
    ServicesTitle => "servicesTitle",
    ServicesSubtitle => "servicesSubtitle",
    ContactTitle => "contactTitle",
    ContactSubtitle => "contactSubtitle",
    Name => "name",
    Email => "email",
    Message => "message",
    SendMessage => "sendMessage",
    FollowMe => "followMe",
    AllRightsReserved => "allRightsReserved",
}

// the translation table
//
// this is an exhaustive match, so adding a key without both strings fails to compile
const fn entry(key: Key) -> Bilingual {
    match key {
        Key::Home => Bilingual::new("Home", "الرئيسية"),
        Key::Portfolio => Bilingual::new("Portfolio", "الأعمال"),
        Key::About => Bilingual::new("About", "من أنا"),
        Key::Services => Bilingual::new("Services", "الخدمات"),
        Key::Contact => Bilingual::new("Contact", "تواصل معي"),
        Key::Title => Bilingual::new("EmadAlddine Ismael", "عماد الدين إسماعيل"),
        Key::Subtitle => Bilingual::new("Graphic Designer", "مصمم جرافيك"),
        Key::HeroTitle => Bilingual::new(
            "Creative Graphic Designer & Brand Specialist",
            "مصمم جرافيك مبدع ومتخصص في العلامات التجارية",
        ),
        Key::HeroSubtitle => Bilingual::new(
            "I craft memorable logos, visual identities and print work that help brands stand out.",
            "أصمم شعارات وهويات بصرية ومطبوعات لا تُنسى تساعد العلامات التجارية على التميز.",
        ),
        Key::SeeMyWork => Bilingual::new("See My Work", "شاهد أعمالي"),
        Key::HireMe => Bilingual::new("Hire Me", "وظفني"),
        Key::PortfolioTitle => Bilingual::new("My Portfolio", "معرض أعمالي"),
        Key::PortfolioSubtitle => Bilingual::new(
            "A selection of branding, logo and print projects for clients across the region",
            "مجموعة مختارة من مشاريع العلامات التجارية والشعارات والمطبوعات لعملاء في المنطقة",
        ),
        Key::ViewProject => Bilingual::new("View Project", "عرض المشروع"),
        Key::AboutTitle => Bilingual::new("About Me", "نبذة عني"),
        Key::Experience => Bilingual::new("Experience", "الخبرات"),
        Key::Education => Bilingual::new("Education & Certificates", "التعليم والشهادات"),
        Key::Skills => Bilingual::new("Skills", "المهارات"),
        Key::ServicesTitle => Bilingual::new("My Services", "خدماتي"),
        Key::ServicesSubtitle => Bilingual::new(
            "Professional design services tailored to your brand and your budget",
            "خدمات تصميم احترافية مصممة لعلامتك التجارية وميزانيتك",
        ),
        Key::ContactTitle => Bilingual::new("Get In Touch", "تواصل معي"),
        Key::ContactSubtitle => Bilingual::new(
            "Have a project in mind? Let's talk about how I can help bring it to life.",
            "هل لديك مشروع في ذهنك؟ دعنا نتحدث عن كيفية تحويله إلى واقع.",
        ),
        Key::Name => Bilingual::new("Name", "الاسم"),
        Key::Email => Bilingual::new("Email", "البريد الإلكتروني"),
        Key::Message => Bilingual::new("Message", "الرسالة"),
        Key::SendMessage => Bilingual::new("Send Message", "إرسال الرسالة"),
        Key::FollowMe => Bilingual::new("Follow Me", "تابعني"),
        Key::AllRightsReserved => Bilingual::new("All rights reserved", "جميع الحقوق محفوظة"),
    }
}

pub fn translate(key: Key, language: Language) -> &'static str {
    entry(key).get(language)
}

/// Resolve a key by name.
///
/// Unknown names resolve to the name itself, so a typo shows up on the page
/// instead of leaving a blank.
pub fn translate_str(name: &str, language: Language) -> &str {
    match Key::parse(name) {
        Some(key) => translate(key, language),
        None => {
            warn!(key = name, "missing translation key");
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_in_both_languages() {
        assert_eq!(translate(Key::Home, Language::En), "Home");
        assert_eq!(translate(Key::Home, Language::Ar), "الرئيسية");
    }

    #[test]
    fn test_every_key_is_translated() {
        for key in Key::ALL {
            for language in [Language::En, Language::Ar] {
                let text = translate(*key, language);
                assert!(!text.is_empty(), "{key:?} is empty in {language}");
                assert_ne!(text, key.as_str(), "{key:?} falls back in {language}");
            }
        }
    }

    #[test]
    fn test_arabic_differs_from_english() {
        for key in Key::ALL {
            assert_ne!(
                translate(*key, Language::En),
                translate(*key, Language::Ar),
                "{key:?} is untranslated"
            );
        }
    }

    #[test]
    fn test_names_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::parse(key.as_str()), Some(*key));
        }
        assert_eq!(Key::parse("sendMessage"), Some(Key::SendMessage));
    }

    #[test]
    fn test_string_lookup_matches_typed_lookup() {
        assert_eq!(translate_str("home", Language::En), "Home");
        assert_eq!(
            translate_str("contact", Language::Ar),
            translate(Key::Contact, Language::Ar)
        );
    }

    #[test]
    fn test_missing_key_falls_back_to_name() {
        assert_eq!(
            translate_str("nonexistent-key", Language::En),
            "nonexistent-key"
        );
        assert_eq!(translate_str("", Language::Ar), "");
    }

    #[test]
    fn test_lookup_is_repeatable() {
        let first = translate(Key::HeroTitle, Language::Ar);
        let _ = translate(Key::HeroTitle, Language::En);
        assert_eq!(translate(Key::HeroTitle, Language::Ar), first);
    }

    #[test]
    fn test_bilingual_same() {
        let text = Bilingual::same("9+");
        assert_eq!(text.get(Language::En), text.get(Language::Ar));
    }
}
