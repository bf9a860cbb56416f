#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
use common::prefs::{apply_document_attributes, use_pref_store_provider, use_site_config_provider};

mod components;
use components::navigation::Layout;

mod home;
use home::Home;

mod portfolio;
use portfolio::Portfolio;

mod about;
use about::About;

mod services;
use services::Services;

mod contact;
use contact::Contact;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/portfolio")]
        Portfolio {},
        #[route("/about")]
        About {},
        #[route("/services")]
        Services {},
        #[route("/contact")]
        Contact {},
}

#[component]
pub fn App() -> Element {
    use_site_config_provider();
    let prefs = use_pref_store_provider();

    // re-runs whenever either preference changes, since snapshot() subscribes to the store
    use_effect(move || apply_document_attributes(prefs.snapshot()));

    let snapshot = prefs.snapshot();
    let class = format!("app {}", snapshot.theme().css_class());

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        div {
            class: "{class}",
            dir: snapshot.direction().as_str(),
            lang: snapshot.language().code(),
            Router::<Route> {}
        }
    }
}
