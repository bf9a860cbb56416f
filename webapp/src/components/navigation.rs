use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::{Key, Theme};

use crate::Route;
use crate::common::prefs::{use_prefs, use_site_config};
use crate::components::{footer::Footer, whatsapp::WhatsAppFloat};

// the five top-level pages, in header order
const NAV_ITEMS: [(Key, Route); 5] = [
    (Key::Home, Route::Home {}),
    (Key::Portfolio, Route::Portfolio {}),
    (Key::About, Route::About {}),
    (Key::Services, Route::Services {}),
    (Key::Contact, Route::Contact {}),
];

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
    #[props(default)]
    onclick: Option<EventHandler<MouseEvent>>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;
    let onclick = props.onclick;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            to: target,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            "{name}"
        }
    }
}

#[component]
fn PrefToggles() -> Element {
    let mut prefs = use_prefs();

    let theme_icon = match prefs.theme() {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };
    let language_label = prefs.language().switch_label();

    rsx! {
        button {
            class: "btn btn-outline btn-sm",
            title: "Toggle theme",
            onclick: move |_| prefs.toggle_theme(),
            "{theme_icon}"
        }
        button {
            class: "btn btn-outline btn-sm",
            title: "Toggle language",
            onclick: move |_| prefs.toggle_language(),
            span { "🌐" }
            "{language_label}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let prefs = use_prefs();
    let config = use_site_config();
    let mut menu_open = use_signal(|| false);

    let title = prefs.t(Key::Title);
    let subtitle = prefs.t(Key::Subtitle);

    rsx! {
        header { class: "app-header",
            div { class: "container",
                div { class: "nav-container",
                    Link { to: Route::Home {}, class: "logo",
                        div { class: "logo-mark",
                            img { src: "{config.logo_url}", alt: "{title}" }
                        }
                        div {
                            span { class: "logo-title", "{title}" }
                            span { class: "logo-subtitle", "{subtitle}" }
                        }
                    }

                    nav { class: "nav-links",
                        for (key , target) in NAV_ITEMS {
                            NavBarButton { key: "{key.as_str()}", name: prefs.t(key).to_owned(), target }
                        }
                    }

                    div { class: "nav-actions",
                        PrefToggles {}
                        button {
                            class: "btn menu-btn",
                            title: "Menu",
                            onclick: move |_| menu_open.toggle(),
                            if menu_open() { "✕" } else { "☰" }
                        }
                    }
                }
            }

            nav { class: if menu_open() { "mobile-nav open" } else { "mobile-nav" },
                for (key , target) in NAV_ITEMS {
                    NavBarButton {
                        key: "{key.as_str()}",
                        name: prefs.t(key).to_owned(),
                        target,
                        onclick: move |_| menu_open.set(false),
                    }
                }
            }
        }
    }
}

#[component]
pub fn Layout() -> Element {
    rsx! {
        NavBarInner {}
        main { class: "page-main", Outlet::<Route> {} }
        Footer {}
        WhatsAppFloat {}
    }
}
