use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::{Bilingual, Key, contact::whatsapp_link};

use crate::Route;
use crate::common::prefs::{use_prefs, use_site_config};

struct Stat {
    icon: &'static str,
    value: &'static str,
    label: Bilingual,
}

const STATS: [Stat; 3] = [
    Stat {
        icon: "💼",
        value: "9+",
        label: Bilingual::new("Years Experience", "سنوات خبرة"),
    },
    Stat {
        icon: "👥",
        value: "200+",
        label: Bilingual::new("Happy Clients", "عميل سعيد"),
    },
    Stat {
        icon: "★",
        value: "500+",
        label: Bilingual::new("Projects Completed", "مشروع مكتمل"),
    },
];

struct Featured {
    title: Bilingual,
    category: Bilingual,
    image: &'static str,
}

const SIDER_RESOURCES: &str =
    "https://pub-cdn.sider.ai/u/U0AWH647XGE/web-coder/68867f69f2d3a0ac8dcde35e/resource";

const FEATURED: [Featured; 3] = [
    Featured {
        title: Bilingual::new("Corporate Branding", "الهوية التجارية"),
        category: Bilingual::new("Branding", "علامة تجارية"),
        image: "7a490297-a2a4-4fbe-ab5c-48a6315f9db5.jpg",
    },
    Featured {
        title: Bilingual::new("Logo Design Collection", "مجموعة تصميم الشعارات"),
        category: Bilingual::new("Logo Design", "تصميم شعارات"),
        image: "95a360c9-2126-4c2f-8368-9968256a5d96.jpg",
    },
    Featured {
        title: Bilingual::new("Print Materials", "المواد المطبوعة"),
        category: Bilingual::new("Print Design", "تصميم طباعي"),
        image: "c69cd136-f214-49f9-8e9d-afd6449d97cc.jpg",
    },
];

const FEATURED_TITLE: Bilingual = Bilingual::new("Featured Work", "أعمال مميزة");
const FEATURED_SUBTITLE: Bilingual = Bilingual::new(
    "A showcase of my recent creative projects and design solutions",
    "عرض لأحدث مشاريعي الإبداعية وحلول التصميم",
);
const VIEW_ALL: Bilingual = Bilingual::new("View All Projects", "عرض جميع المشاريع");
const CTA_TITLE: Bilingual = Bilingual::new("Ready to Start Your Project?", "جاهز لبدء مشروعك؟");
const CTA_BODY: Bilingual = Bilingual::new(
    "Let's work together to create something amazing. Contact me today to discuss your design needs.",
    "دعنا نعمل معاً لإنشاء شيء مذهل. تواصل معي اليوم لمناقشة احتياجات التصميم الخاصة بك.",
);
const WHATSAPP: Bilingual = Bilingual::new("WhatsApp", "واتساب");

#[component]
fn Hero() -> Element {
    let prefs = use_prefs();
    let config = use_site_config();

    // the title is revealed a word at a time
    let words: Vec<(usize, &str, String)> = prefs
        .t(Key::HeroTitle)
        .split(' ')
        .enumerate()
        .map(|(index, word)| (index, word, format!("animation-delay: {:.1}s", index as f32 * 0.1)))
        .collect();

    rsx! {
        section { class: "hero",
            div { class: "container",
                div { class: "hero-grid",
                    div {
                        h1 { class: "hero-title",
                            for (index , word , delay) in words {
                                span {
                                    key: "{index}",
                                    class: "hero-word",
                                    style: "{delay}",
                                    "{word} "
                                }
                            }
                        }
                        p { class: "hero-subtitle", {prefs.t(Key::HeroSubtitle)} }

                        div { class: "hero-actions",
                            Link {
                                to: Route::Portfolio {},
                                class: "btn btn-primary btn-lg",
                                {prefs.t(Key::SeeMyWork)}
                                span { class: "flip", "→" }
                            }
                            Link {
                                to: Route::Contact {},
                                class: "btn btn-outline btn-lg",
                                {prefs.t(Key::HireMe)}
                            }
                        }

                        div { class: "stats-grid",
                            for stat in STATS.iter() {
                                div { key: "{stat.value}",
                                    div { class: "stat-icon", "{stat.icon}" }
                                    div { class: "stat-value", "{stat.value}" }
                                    div { class: "stat-label", {prefs.text(stat.label)} }
                                }
                            }
                        }
                    }

                    div { class: "hero-portrait",
                        div { class: "portrait-ring" }
                        div { class: "portrait-img",
                            img { src: "{config.profile_url}", alt: prefs.t(Key::Title) }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let prefs = use_prefs();
    let config = use_site_config();

    let whatsapp = whatsapp_link(&config, None);

    rsx! {
        Hero {}

        section { class: "section section-alt",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", {prefs.text(FEATURED_TITLE)} }
                    p { class: "section-subtitle", {prefs.text(FEATURED_SUBTITLE)} }
                }

                div { class: "project-grid",
                    for project in FEATURED.iter() {
                        div { key: "{project.image}", class: "card card-hover project-card",
                            div { class: "project-image",
                                img {
                                    src: "{SIDER_RESOURCES}/{project.image}",
                                    alt: prefs.text(project.title),
                                }
                            }
                            div { class: "project-overlay",
                                span { class: "project-category", {prefs.text(project.category)} }
                                h3 { class: "project-title", {prefs.text(project.title)} }
                            }
                        }
                    }
                }

                div { class: "center",
                    Link {
                        to: Route::Portfolio {},
                        class: "btn btn-primary btn-lg",
                        {prefs.text(VIEW_ALL)}
                        span { class: "flip", "→" }
                    }
                }
            }
        }

        section { class: "cta-band",
            h2 { {prefs.text(CTA_TITLE)} }
            p { {prefs.text(CTA_BODY)} }
            div { class: "cta-actions",
                Link { to: Route::Contact {}, class: "btn btn-light btn-lg", {prefs.t(Key::Contact)} }
                a {
                    class: "btn btn-light btn-lg",
                    href: "{whatsapp}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {prefs.text(WHATSAPP)}
                }
            }
        }
    }
}
