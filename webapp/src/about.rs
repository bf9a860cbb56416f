use dioxus::prelude::*;

use folio::{Bilingual, Key};

use crate::common::prefs::{use_prefs, use_site_config};

// the bio and cv entries only appear on this page, so they live here instead of in the
// shared translation table

struct Job {
    title: Bilingual,
    company: Bilingual,
    period: Bilingual,
    location: Bilingual,
    description: Bilingual,
}

const MADINA: Bilingual = Bilingual::same("Al-Madina, Saudi Arabia");

const EXPERIENCE: [Job; 3] = [
    Job {
        title: Bilingual::new("Graphic Designer", "مصمم جرافيك"),
        company: Bilingual::new("Al Masjid Al Nabawi", "المسجد النبوي"),
        period: Bilingual::new("2020 - Present", "2020 - الحاضر"),
        location: MADINA,
        description: Bilingual::new(
            "Created impactful designs for awareness and guidance campaigns. Enhanced branding through innovative design solutions.",
            "إنشاء تصاميم مؤثرة لحملات التوعية والإرشاد. تعزيز العلامة التجارية من خلال حلول التصميم المبتكرة.",
        ),
    },
    Job {
        title: Bilingual::new("Graphic & Printing Specialist", "أخصائي جرافيك وطباعة"),
        company: Bilingual::new("Al Fanoos Press", "مطبعة الفانوس"),
        period: Bilingual::same("2018 - 2020"),
        location: MADINA,
        description: Bilingual::new(
            "Designed engaging graphic & printing content for various printable items. Collaborated with cross-functional teams to deliver projects on time.",
            "تصميم محتوى جرافيك وطباعة جذاب لمختلف العناصر القابلة للطباعة. التعاون مع فرق متعددة الوظائف لتسليم المشاريع في الوقت المحدد.",
        ),
    },
    Job {
        title: Bilingual::new("Freelance Designer", "مصمم مستقل"),
        company: Bilingual::new("Self-Employed", "عمل حر"),
        period: Bilingual::new("2015 - Present", "2015 - الحاضر"),
        location: Bilingual::new("Remote", "عن بُعد"),
        description: Bilingual::new(
            "Delivered custom design solutions for clients across various industries. Built strong client relationships and maintained high satisfaction rates.",
            "تقديم حلول تصميم مخصصة للعملاء في مختلف الصناعات. بناء علاقات قوية مع العملاء والحفاظ على معدلات رضا عالية.",
        ),
    },
];

const EDUCATION: [(Bilingual, &str); 6] = [
    (
        Bilingual::new("Bachelor of Graphic & Multimedia", "بكالوريوس في الجرافيك والوسائط المتعددة"),
        "2021",
    ),
    (Bilingual::new("TOEFL ITP Certificate", "شهادة توفل ITP"), "2021"),
    (Bilingual::new("Diplôme français junior", "دبلوم فرنسي مبتدئ"), "2022"),
    (Bilingual::new("English Advanced Diploma", "دبلوم اللغة الإنجليزية المتقدم"), "2018"),
    (Bilingual::new("Designing Diploma", "دبلوم التصميم"), "2016"),
    (Bilingual::new("ICDL Certificate", "شهادة ICDL"), "2016"),
];

const SKILLS: [(&str, u8); 6] = [
    ("Adobe Creative Suite", 95),
    ("3D Modeling & Rendering", 90),
    ("UI/UX Design Principles", 85),
    ("Typography & Branding", 98),
    ("Print Design", 95),
    ("Mobile App UI Design", 80),
];

const SPOKEN: [(Bilingual, Bilingual, u8); 3] = [
    (
        Bilingual::new("Arabic", "العربية"),
        Bilingual::new("Mother Tongue", "اللغة الأم"),
        100,
    ),
    (
        Bilingual::new("English", "الإنجليزية"),
        Bilingual::new("Advanced", "متقدم"),
        90,
    ),
    (
        Bilingual::new("French", "الفرنسية"),
        Bilingual::new("Elementary", "مبتدئ"),
        40,
    ),
];

const INTRO: Bilingual = Bilingual::new(
    "Passionate designer with 9+ years of experience creating impactful visual solutions",
    "مصمم شغوف بخبرة تزيد عن 9 سنوات في إنشاء حلول بصرية مؤثرة",
);
const PERSONAL_INFO: Bilingual = Bilingual::new("Personal Information", "المعلومات الشخصية");
const NATIONALITY: Bilingual = Bilingual::new("Yemeni Nationality", "الجنسية اليمنية");
const YEARS: Bilingual = Bilingual::new("9+ Years Experience", "9+ سنوات خبرة");
const LANGUAGES: Bilingual = Bilingual::new("Languages", "اللغات");
const BIO_TITLE: Bilingual = Bilingual::new("About Me", "نبذة عني");
const BIO: Bilingual = Bilingual::new(
    "Creative and experienced Branding and Logo Designer with over 9 years of expertise in developing impactful visual identities. Skilled in managing design teams, fostering collaboration, and ensuring the successful execution of creative projects. Proficient in delivering professional logo designs, brand guidelines, and cohesive marketing materials. Capable of taking on senior-level roles as a Senior Graphic Designer to lead projects and mentor junior designers. Passionate about design innovation and achieving excellence in every project.",
    "مصمم علامات تجارية وشعارات مبدع وذو خبرة تزيد عن 9 سنوات في تطوير الهويات البصرية المؤثرة. ماهر في إدارة فرق التصميم وتعزيز التعاون وضمان التنفيذ الناجح للمشاريع الإبداعية. متمكن من تقديم تصاميم شعارات احترافية وإرشادات العلامة التجارية ومواد تسويقية متماسكة. قادر على تولي أدوار على مستوى أول كمصمم جرافيك أول لقيادة المشاريع وتوجيه المصممين المبتدئين. شغوف بالابتكار في التصميم وتحقيق التميز في كل مشروع.",
);

#[derive(Clone, PartialEq, Props)]
struct LevelBarProps {
    label: String,
    detail: String,
    percent: u8,
}

#[component]
fn LevelBar(props: LevelBarProps) -> Element {
    let percent = props.percent.min(100);

    rsx! {
        div { class: "form-group",
            div { class: "bar-row",
                span { "{props.label}" }
                span { "{props.detail}" }
            }
            div { class: "bar",
                div { class: "bar-fill", style: "width: {percent}%" }
            }
        }
    }
}

#[component]
fn ProfileColumn() -> Element {
    let prefs = use_prefs();
    let config = use_site_config();

    rsx! {
        div {
            div { class: "card panel",
                img {
                    class: "profile-img",
                    src: "{config.profile_url}",
                    alt: prefs.t(Key::Title),
                }
            }

            div { class: "card panel",
                h3 { {prefs.text(PERSONAL_INFO)} }
                div { class: "info-list",
                    span { "⌖ {config.location}" }
                    span { "⚑ " {prefs.text(NATIONALITY)} }
                    span { "🏆 " {prefs.text(YEARS)} }
                }
            }

            div { class: "card panel",
                h3 { {prefs.text(LANGUAGES)} }
                for (name , level , percent) in SPOKEN.iter() {
                    LevelBar {
                        key: "{name.en}",
                        label: prefs.text(*name).to_owned(),
                        detail: prefs.text(*level).to_owned(),
                        percent: *percent,
                    }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let prefs = use_prefs();

    rsx! {
        div { class: "page",
            div { class: "container",
                div { class: "section-header",
                    h1 { class: "page-title", {prefs.t(Key::AboutTitle)} }
                    p { class: "section-subtitle", {prefs.text(INTRO)} }
                }

                div { class: "about-grid",
                    ProfileColumn {}

                    div {
                        div { class: "card panel",
                            h3 { {prefs.text(BIO_TITLE)} }
                            p { {prefs.text(BIO)} }
                        }

                        div { class: "card panel",
                            h3 { {prefs.t(Key::Experience)} }
                            for job in EXPERIENCE.iter() {
                                div { key: "{job.company.en}", class: "timeline-item",
                                    div { class: "timeline-dot" }
                                    div { class: "timeline-head",
                                        h4 { {prefs.text(job.title)} }
                                        span { class: "tag", {prefs.text(job.period)} }
                                    }
                                    div { class: "timeline-meta",
                                        {prefs.text(job.company)}
                                        " • "
                                        {prefs.text(job.location)}
                                    }
                                    p { {prefs.text(job.description)} }
                                }
                            }
                        }

                        div { class: "card panel",
                            h3 { {prefs.t(Key::Education)} }
                            div { class: "edu-list",
                                for (title , year) in EDUCATION.iter() {
                                    div { key: "{title.en}", class: "edu-item",
                                        h4 { {prefs.text(*title)} }
                                        span { "{year}" }
                                    }
                                }
                            }
                        }

                        div { class: "card panel",
                            h3 { {prefs.t(Key::Skills)} }
                            for (name , level) in SKILLS.iter() {
                                LevelBar {
                                    key: "{name}",
                                    label: name.to_string(),
                                    detail: format!("{level}%"),
                                    percent: *level,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
