use dioxus::prelude::*;

use folio::{Bilingual, Key};

use crate::common::prefs::{use_prefs, use_site_config};

const BLURB: Bilingual = Bilingual::new(
    "Creative graphic designer with 9+ years of experience in branding and visual identity development.",
    "مصمم جرافيك مبدع بخبرة تزيد عن 9 سنوات في تطوير العلامات التجارية والهوية البصرية.",
);

#[component]
pub fn Footer() -> Element {
    let prefs = use_prefs();
    let config = use_site_config();

    let title = prefs.t(Key::Title);
    let rights = prefs.t(Key::AllRightsReserved);

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        div { class: "logo",
                            div { class: "logo-mark",
                                img { src: "{config.logo_url}", alt: "{title}" }
                            }
                            div {
                                h3 { "{title}" }
                                p { {prefs.t(Key::Subtitle)} }
                            }
                        }
                        p { {prefs.text(BLURB)} }
                    }

                    div {
                        h3 { {prefs.t(Key::Contact)} }
                        p { "✉ {config.email}" }
                        p { "☎ {config.phone}" }
                        p { "⌖ {config.location}" }
                    }

                    div {
                        h3 { {prefs.t(Key::FollowMe)} }
                        div { class: "social-links",
                            for link in config.social.iter() {
                                a {
                                    key: "{link.name}",
                                    class: "social-link",
                                    href: "{link.href}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{link.name}"
                                }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    "© 2024 {title}. {rights}."
                }
            }
        }
    }
}
