use std::{fmt, sync::LazyLock};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::debug;

use crate::{config::SiteConfig, i18n::Bilingual};

// outbound handoffs
//
// the site has no backend, so "sending" the contact form means composing a mailto link and
// letting the visitor's mail client take over.  the same goes for whatsapp and the phone

// the characters encodeURIComponent leaves alone; mail clients and wa.me both expect
// %20 for spaces rather than the + of form encoding
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("EMAIL_REGEX is a valid pattern"));

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingMessage,
}

impl FormError {
    pub fn message(self) -> Bilingual {
        match self {
            Self::MissingName => Bilingual::new("Please enter your name.", "يرجى إدخال اسمك."),
            Self::MissingEmail => {
                Bilingual::new("Please enter your email.", "يرجى إدخال بريدك الإلكتروني.")
            }
            Self::InvalidEmail => Bilingual::new(
                "Please enter a valid email address.",
                "يرجى إدخال بريد إلكتروني صحيح.",
            ),
            Self::MissingMessage => Bilingual::new("Please enter a message.", "يرجى كتابة رسالتك."),
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message().en)
    }
}

impl std::error::Error for FormError {}

impl ContactForm {
    /// Check the required fields, reporting the first problem in form order.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !EMAIL.is_match(email) {
            return Err(FormError::InvalidEmail);
        }

        if self.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }

        Ok(())
    }

    fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name.trim(),
            self.email.trim(),
            self.message.trim()
        )
    }
}

pub fn mailto_link(config: &SiteConfig, form: &ContactForm) -> String {
    let subject = match form.subject.trim() {
        "" => config.mail_subject.as_str(),
        subject => subject,
    };

    debug!(subject, "composing mailto link");

    format!(
        "mailto:{}?subject={}&body={}",
        config.email,
        encode_component(subject),
        encode_component(&form.body())
    )
}

pub fn whatsapp_link(config: &SiteConfig, text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => {
            format!("https://wa.me/{}?text={}", config.whatsapp, encode_component(text))
        }
        _ => format!("https://wa.me/{}", config.whatsapp),
    }
}

pub fn tel_link(config: &SiteConfig) -> String {
    let number: String = config.phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Sara".to_owned(),
            email: "sara@example.com".to_owned(),
            subject: String::new(),
            message: "I need a logo & a card.".to_owned(),
        }
    }

    #[test]
    fn test_encode_matches_encode_uri_component() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("it's (ok)!*~"), "it's%20(ok)!*~");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("مرحبا"), "%D9%85%D8%B1%D8%AD%D8%A8%D8%A7");
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let form = ContactForm {
            name: "  ".to_owned(),
            ..ContactForm::default()
        };
        assert_eq!(form.validate(), Err(FormError::MissingName));

        let form = ContactForm {
            email: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingEmail));

        let form = ContactForm {
            email: "not-an-address".to_owned(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));

        let form = ContactForm {
            message: "\n".to_owned(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingMessage));
    }

    #[test]
    fn test_errors_have_both_languages() {
        for err in [
            FormError::MissingName,
            FormError::MissingEmail,
            FormError::InvalidEmail,
            FormError::MissingMessage,
        ] {
            let msg = err.message();
            assert!(!msg.en.is_empty());
            assert!(!msg.ar.is_empty());
            assert_eq!(err.to_string(), msg.en);
        }
    }

    #[test]
    fn test_mailto_uses_default_subject() {
        let config = SiteConfig::default();
        let link = mailto_link(&config, &filled());

        assert!(link.starts_with("mailto:Emad.i202020@gmail.com?subject=Design%20Project%20Inquiry&body="));
        assert!(link.ends_with(
            "Name%3A%20Sara%0AEmail%3A%20sara%40example.com%0A%0AMessage%3A%0AI%20need%20a%20logo%20%26%20a%20card."
        ));
    }

    #[test]
    fn test_mailto_keeps_custom_subject() {
        let config = SiteConfig::default();
        let form = ContactForm {
            subject: "Packaging".to_owned(),
            ..filled()
        };

        assert!(mailto_link(&config, &form).contains("?subject=Packaging&body="));
    }

    #[test]
    fn test_whatsapp_links() {
        let config = SiteConfig::default();

        assert_eq!(whatsapp_link(&config, None), "https://wa.me/+966504487308");
        assert_eq!(whatsapp_link(&config, Some("")), "https://wa.me/+966504487308");
        assert_eq!(
            whatsapp_link(&config, Some("Hello there")),
            "https://wa.me/+966504487308?text=Hello%20there"
        );
    }

    #[test]
    fn test_tel_link_strips_spaces() {
        assert_eq!(tel_link(&SiteConfig::default()), "tel:+966504487308");
    }
}
