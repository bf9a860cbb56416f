use dioxus::prelude::*;

use folio::contact::whatsapp_link;

use crate::common::prefs::use_site_config;

// always-visible chat shortcut, prefilled with the configured greeting
#[component]
pub fn WhatsAppFloat() -> Element {
    let config = use_site_config();
    let href = whatsapp_link(&config, Some(config.whatsapp_greeting.as_str()));

    rsx! {
        a {
            class: "whatsapp-float",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            title: "Contact via WhatsApp",
            "💬"
        }
    }
}
