use dioxus::prelude::*;
use gloo_console::error as console_error;
use tracing::debug;

use folio::{
    Bilingual, Key,
    contact::{ContactForm, FormError, mailto_link, tel_link, whatsapp_link},
};

use crate::common::prefs::{use_prefs, use_site_config};

const FORM_TITLE: Bilingual = Bilingual::new("Send me a message", "أرسل لي رسالة");
const SUBJECT: Bilingual = Bilingual::new("Subject", "الموضوع");
const NAME_PLACEHOLDER: Bilingual = Bilingual::new("Your name", "اسمك");
const EMAIL_PLACEHOLDER: Bilingual = Bilingual::same("your.email@example.com");
const SUBJECT_PLACEHOLDER: Bilingual = Bilingual::new("Project inquiry", "استفسار عن مشروع");
const MESSAGE_PLACEHOLDER: Bilingual = Bilingual::new(
    "Tell me about your project, timeline, and budget...",
    "أخبرني عن مشروعك والجدول الزمني والميزانية...",
);

const EMAIL_LABEL: Bilingual = Bilingual::new("Email", "البريد الإلكتروني");
const PHONE_LABEL: Bilingual = Bilingual::new("Phone", "الهاتف");
const LOCATION_LABEL: Bilingual = Bilingual::new("Location", "الموقع");
const WHATSAPP_LABEL: Bilingual = Bilingual::new("WhatsApp", "واتساب");
const QUICK_CHAT: Bilingual = Bilingual::new("Quick Chat", "محادثة سريعة");
const CALL_NOW: Bilingual = Bilingual::new("Call Now", "اتصل الآن");
const RESPONSE_TIME: Bilingual = Bilingual::new(
    "⚡ Usually responds within 2 hours",
    "⚡ يرد عادة خلال ساعتين",
);

const FAQ_TITLE: Bilingual = Bilingual::new("Frequently Asked Questions", "الأسئلة الشائعة");
const FAQ: [(Bilingual, Bilingual); 4] = [
    (
        Bilingual::new("What's your typical turnaround time?", "ما هو الوقت المعتاد للتسليم؟"),
        Bilingual::new(
            "Logo design: 3-5 days, Brand identity: 1-2 weeks, Complex projects: 2-4 weeks. Rush orders available.",
            "تصميم الشعار: 3-5 أيام، الهوية التجارية: 1-2 أسبوع، المشاريع المعقدة: 2-4 أسابيع. طلبات عاجلة متاحة.",
        ),
    ),
    (
        Bilingual::new("Do you offer revisions?", "هل تقدم تعديلات؟"),
        Bilingual::new(
            "Yes! I offer revisions until you're 100% satisfied with the final design.",
            "نعم! أقدم تعديلات حتى تكون راضياً بنسبة 100% عن التصميم النهائي.",
        ),
    ),
    (
        Bilingual::new("What file formats do you provide?", "ما هي تنسيقات الملفات التي تقدمها؟"),
        Bilingual::new(
            "All projects include vector files (AI, EPS), high-res raster files (PNG, JPG), and web-optimized versions.",
            "جميع المشاريع تشمل ملفات فيكتور (AI, EPS)، ملفات عالية الدقة (PNG, JPG)، وإصدارات محسنة للويب.",
        ),
    ),
    (
        Bilingual::new("How do we communicate during the project?", "كيف نتواصل أثناء المشروع؟"),
        Bilingual::new(
            "Primary communication via WhatsApp and email. Regular updates and progress sharing throughout the project.",
            "التواصل الأساسي عبر واتساب والبريد الإلكتروني. تحديثات منتظمة ومشاركة التقدم خلال المشروع.",
        ),
    ),
];

// hand the composed message to the visitor's mail client
fn open_link(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(err) = window.location().set_href(href) {
        console_error!(format!("Failed to open mail client: {err:?}"));
    }
}

#[component]
fn MessageForm() -> Element {
    let prefs = use_prefs();
    let config = use_site_config();
    let mut form_error = use_signal(|| None::<FormError>);

    rsx! {
        div { class: "card panel",
            h2 { {prefs.text(FORM_TITLE)} }

            form {
                onsubmit: move |event| {
                    event.prevent_default();

                    let values = event.values();
                    let field = |name: &str| match values.get(name) {
                        Some(val) => val.as_value(),
                        None => String::new(),
                    };
                    let form = ContactForm {
                        name: field("name"),
                        email: field("email"),
                        subject: field("subject"),
                        message: field("message"),
                    };

                    match form.validate() {
                        Ok(()) => {
                            form_error.set(None);
                            debug!("contact form validated, opening mail client");
                            open_link(&mailto_link(&config, &form));
                        }
                        Err(err) => {
                            debug!("contact form rejected: {err}");
                            form_error.set(Some(err));
                        }
                    }
                },

                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", {prefs.t(Key::Name)} " *" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            name: "name",
                            placeholder: prefs.text(NAME_PLACEHOLDER),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", {prefs.t(Key::Email)} " *" }
                        input {
                            class: "form-input",
                            r#type: "email",
                            name: "email",
                            placeholder: prefs.text(EMAIL_PLACEHOLDER),
                        }
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", {prefs.text(SUBJECT)} }
                    input {
                        class: "form-input",
                        r#type: "text",
                        name: "subject",
                        placeholder: prefs.text(SUBJECT_PLACEHOLDER),
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", {prefs.t(Key::Message)} " *" }
                    textarea {
                        class: "form-input",
                        name: "message",
                        rows: "6",
                        placeholder: prefs.text(MESSAGE_PLACEHOLDER),
                    }
                }

                if let Some(err) = form_error() {
                    p { class: "form-error", {prefs.text(err.message())} }
                }

                button { class: "btn btn-primary btn-lg btn-block", r#type: "submit",
                    span { class: "flip", "➤" }
                    {prefs.t(Key::SendMessage)}
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct InfoCardProps {
    icon: String,
    title: String,
    value: String,
    #[props(default)]
    href: Option<String>,
}

#[component]
fn InfoCard(props: InfoCardProps) -> Element {
    // only web links leave the page
    let external = props.href.as_deref().is_some_and(|href| href.starts_with("http"));

    rsx! {
        div { class: "card card-hover info-card",
            div { class: "info-icon", "{props.icon}" }
            div {
                h3 { "{props.title}" }
                if let Some(href) = props.href.clone() {
                    a {
                        href: "{href}",
                        target: if external { "_blank" } else { "_self" },
                        rel: if external { "noopener noreferrer" } else { "" },
                        "{props.value}"
                    }
                } else {
                    span { "{props.value}" }
                }
            }
        }
    }
}

#[component]
fn ContactDetails() -> Element {
    let prefs = use_prefs();
    let config = use_site_config();

    let whatsapp = whatsapp_link(&config, None);
    let tel = tel_link(&config);

    rsx! {
        div {
            div { class: "info-cards",
                InfoCard {
                    icon: "✉".to_owned(),
                    title: prefs.text(EMAIL_LABEL).to_owned(),
                    value: config.email.clone(),
                    href: format!("mailto:{}", config.email),
                }
                InfoCard {
                    icon: "☎".to_owned(),
                    title: prefs.text(PHONE_LABEL).to_owned(),
                    value: config.phone.clone(),
                    href: tel.clone(),
                }
                InfoCard {
                    icon: "⌖".to_owned(),
                    title: prefs.text(LOCATION_LABEL).to_owned(),
                    value: config.location.clone(),
                }
                InfoCard {
                    icon: "💬".to_owned(),
                    title: prefs.text(WHATSAPP_LABEL).to_owned(),
                    value: prefs.text(QUICK_CHAT).to_owned(),
                    href: whatsapp.clone(),
                }
            }

            div { class: "card panel profile-panel",
                img { src: "{config.profile_url}", alt: prefs.t(Key::Title) }
                h3 { {prefs.t(Key::Title)} }
                p { {prefs.t(Key::Subtitle)} }

                div { class: "response-note", {prefs.text(RESPONSE_TIME)} }

                h4 { {prefs.t(Key::FollowMe)} }
                div { class: "social-links",
                    for link in config.social.iter() {
                        a {
                            key: "{link.name}",
                            class: "social-link",
                            href: "{link.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "{link.name}",
                            "{link.name}"
                        }
                    }
                }
            }

            div { class: "quick-actions",
                a {
                    class: "btn btn-whatsapp btn-lg",
                    href: "{whatsapp}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {prefs.text(WHATSAPP_LABEL)}
                }
                a { class: "btn btn-outline btn-lg", href: "{tel}", {prefs.text(CALL_NOW)} }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let prefs = use_prefs();

    rsx! {
        div { class: "page",
            div { class: "container",
                div { class: "section-header",
                    h1 { class: "page-title", {prefs.t(Key::ContactTitle)} }
                    p { class: "section-subtitle", {prefs.t(Key::ContactSubtitle)} }
                }

                div { class: "contact-grid",
                    MessageForm {}
                    ContactDetails {}
                }

                div { class: "card panel",
                    h2 { class: "section-title", {prefs.text(FAQ_TITLE)} }
                    div { class: "faq-grid",
                        for (question , answer) in FAQ.iter() {
                            div { key: "{question.en}", class: "faq-item",
                                h3 { {prefs.text(*question)} }
                                p { {prefs.text(*answer)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
