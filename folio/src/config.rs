use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// site configuration
//
// the contact details and outbound links shown on every page.  the webapp embeds a toml
// document at build time, so a change of phone number or handle does not touch any code
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    // shown as-is on the contact cards and footer
    pub email: String,
    pub phone: String,
    pub location: String,

    // digits with a leading +, used to build wa.me links
    pub whatsapp: String,

    // prefilled text for the floating chat button
    pub whatsapp_greeting: String,

    // subject used when the contact form leaves it blank
    pub mail_subject: String,

    pub logo_url: String,
    pub profile_url: String,

    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

const SIDER_RESOURCES: &str =
    "https://pub-cdn.sider.ai/u/U0AWH647XGE/web-coder/68867f69f2d3a0ac8dcde35e/resource";

impl Default for SiteConfig {
    fn default() -> Self {
        let social = [
            ("Instagram", "https://instagram.com/emadalddine"),
            ("LinkedIn", "https://linkedin.com/in/emadalddine"),
            ("Behance", "https://behance.net/emadalddine"),
            ("Dribbble", "https://dribbble.com/emadalddine"),
            ("Facebook", "https://facebook.com/emadalddine"),
        ]
        .into_iter()
        .map(|(name, href)| SocialLink {
            name: name.to_owned(),
            href: href.to_owned(),
        })
        .collect();

        SiteConfig {
            email: String::from("Emad.i202020@gmail.com"),
            phone: String::from("+966 504487308"),
            location: String::from("Al-Madina, Saudi Arabia"),
            whatsapp: String::from("+966504487308"),
            whatsapp_greeting: String::from(
                "Hello! I would like to discuss a design project with you.",
            ),
            mail_subject: String::from("Design Project Inquiry"),
            logo_url: format!("{SIDER_RESOURCES}/4aedc5a3-b524-4b41-ae57-a9899840f1d8.png"),
            profile_url: format!("{SIDER_RESOURCES}/d349de7c-8cfe-4e22-80a8-669f9b8a7475.jpg"),
            social,
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> Result<SiteConfig> {
    debug!("reading site config");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    debug!(links = data.config.social.len(), "successfully parsed site config");
    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = read_config(include_str!("../../webapp/site.toml")).unwrap();

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_social_links_are_optional() {
        let doc = r#"
            [config]
            email = "someone@example.com"
            phone = "+1 555 0100"
            location = "Somewhere"
            whatsapp = "+15550100"
            whatsapp_greeting = "Hi"
            mail_subject = "Hello"
            logo_url = "logo.png"
            profile_url = "me.jpg"
        "#;

        let config = read_config(doc).unwrap();
        assert_eq!(config.email, "someone@example.com");
        assert!(config.social.is_empty());
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let err = read_config("email = \"x\"").unwrap_err();
        assert!(err.to_string().contains("site config"));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(read_config("[config").is_err());
    }
}
