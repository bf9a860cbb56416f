use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::{
    Bilingual, Key,
    portfolio::{FILTERS, Filter, PROJECTS, Project, filter_projects},
};

use crate::Route;
use crate::common::prefs::use_prefs;

const LOAD_MORE: Bilingual = Bilingual::new("Load More Projects", "تحميل المزيد من المشاريع");
const CTA_TITLE: Bilingual = Bilingual::new("Like What You See?", "أعجبك ما تراه؟");
const CTA_BODY: Bilingual = Bilingual::new(
    "Let's collaborate on your next project. I'm always excited to work on new creative challenges.",
    "لنتعاون في مشروعك القادم. أنا متحمس دائماً للعمل على تحديات إبداعية جديدة.",
);
const START_PROJECT: Bilingual = Bilingual::new("Start a Project", "ابدأ مشروعاً");

#[derive(Clone, PartialEq, Props)]
struct FilterBarProps {
    filter_signal: Signal<Filter>,
}

#[component]
fn FilterBar(props: FilterBarProps) -> Element {
    let prefs = use_prefs();
    let mut filter_signal = props.filter_signal;

    rsx! {
        div { class: "filter-bar",
            for filter in FILTERS.iter().copied() {
                button {
                    key: "{filter.as_str()}",
                    class: if filter_signal() == filter { "btn btn-primary" } else { "btn btn-outline" },
                    onclick: move |_| filter_signal.set(filter),
                    {prefs.text(filter.label())}
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let prefs = use_prefs();
    let project = props.project;

    let title = prefs.text(project.title);

    rsx! {
        div { class: "card card-hover project-card",
            div { class: "project-image",
                img { src: "{project.image}", alt: "{title}" }
            }
            div { class: "project-body",
                div {
                    h3 { class: "project-title", "{title}" }
                    p { class: "project-desc", {prefs.text(project.description)} }
                }
                div { class: "tag-list",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                button { class: "btn btn-primary btn-sm btn-block", {prefs.t(Key::ViewProject)} }
            }
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    let prefs = use_prefs();
    let filter_signal = use_signal(Filter::default);

    let projects = filter_projects(PROJECTS, filter_signal());

    rsx! {
        div { class: "page",
            div { class: "container",
                div { class: "section-header",
                    h1 { class: "page-title", {prefs.t(Key::PortfolioTitle)} }
                    p { class: "section-subtitle", {prefs.t(Key::PortfolioSubtitle)} }
                }

                FilterBar { filter_signal }

                div { class: "project-grid",
                    for project in projects {
                        ProjectCard { key: "{project.id}", project: *project }
                    }
                }

                div { class: "center",
                    button { class: "btn btn-outline btn-lg", {prefs.text(LOAD_MORE)} }
                }

                div { class: "cta-band rounded",
                    h2 { {prefs.text(CTA_TITLE)} }
                    p { {prefs.text(CTA_BODY)} }
                    Link { to: Route::Contact {}, class: "btn btn-light btn-lg", {prefs.text(START_PROJECT)} }
                }
            }
        }
    }
}
