use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::{Bilingual, Key, Language, contact::whatsapp_link};

use crate::Route;
use crate::common::prefs::{use_prefs, use_site_config};

struct Service {
    icon: &'static str,
    title: Bilingual,
    description: Bilingual,
    // feature lists differ in length between languages, so they are kept as parallel slices
    features_en: &'static [&'static str],
    features_ar: &'static [&'static str],
    price: Bilingual,
    popular: bool,
}

impl Service {
    fn features(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::En => self.features_en,
            Language::Ar => self.features_ar,
        }
    }
}

const SERVICES: [Service; 6] = [
    Service {
        icon: "✒",
        title: Bilingual::new("Logo Design", "تصميم الشعارات"),
        description: Bilingual::new(
            "Creating unique and memorable logos that represent your brand identity perfectly.",
            "إنشاء شعارات فريدة ولا تُنسى تمثل هوية علامتك التجارية بشكل مثالي.",
        ),
        features_en: &[
            "3 Initial Concepts",
            "Unlimited Revisions",
            "Vector Files (AI, EPS)",
            "PNG & JPG Files",
            "Brand Guidelines",
        ],
        features_ar: &[
            "3 مفاهيم أولية",
            "تعديلات غير محدودة",
            "ملفات فيكتور (AI, EPS)",
            "ملفات PNG و JPG",
            "إرشادات العلامة التجارية",
        ],
        price: Bilingual::new("Starting at $150", "ابتداءً من 150$"),
        popular: true,
    },
    Service {
        icon: "◈",
        title: Bilingual::new("Brand Identity", "الهوية التجارية"),
        description: Bilingual::new(
            "Complete brand identity packages including logo, colors, typography, and guidelines.",
            "حزم هوية تجارية كاملة تشمل الشعار والألوان والطباعة والإرشادات.",
        ),
        features_en: &[
            "Logo Design",
            "Color Palette",
            "Typography Guide",
            "Business Cards",
            "Letterhead Design",
            "Brand Guidelines",
        ],
        features_ar: &[
            "تصميم الشعار",
            "لوحة الألوان",
            "دليل الطباعة",
            "بطاقات العمل",
            "تصميم ورق الخطابات",
            "إرشادات العلامة التجارية",
        ],
        price: Bilingual::new("Starting at $400", "ابتداءً من 400$"),
        popular: false,
    },
    Service {
        icon: "🖨",
        title: Bilingual::new("Print Design", "التصميم الطباعي"),
        description: Bilingual::new(
            "Professional print materials including brochures, flyers, posters, and marketing collateral.",
            "مواد طباعة احترافية تشمل الكتيبات والنشرات والملصقات والمواد التسويقية.",
        ),
        features_en: &[
            "Brochure Design",
            "Flyer Design",
            "Poster Design",
            "Magazine Layout",
            "Packaging Design",
            "Print-Ready Files",
        ],
        features_ar: &[
            "تصميم الكتيبات",
            "تصميم النشرات",
            "تصميم الملصقات",
            "تخطيط المجلات",
            "تصميم التعبئة",
            "ملفات جاهزة للطباعة",
        ],
        price: Bilingual::new("Starting at $50", "ابتداءً من 50$"),
        popular: false,
    },
    Service {
        icon: "📱",
        title: Bilingual::new("Social Media Design", "تصميم صفحات التواصل الاجتماعي"),
        description: Bilingual::new(
            "Creative and engaging visuals tailored for social media platforms to enhance brand presence and audience interaction.",
            "تصاميم إبداعية وجذابة مخصصة لمنصات التواصل الاجتماعي لتعزيز حضور العلامة التجارية وزيادة تفاعل الجمهور.",
        ),
        features_en: &[
            "Creative social media posts, stories, ads, and branding designs to boost engagement.",
        ],
        features_ar: &["تصاميم إبداعية للمنشورات والقصص والإعلانات والهوية البصرية لزيادة التفاعل."],
        price: Bilingual::new("Starting at $150", "ابتداءً من 150$"),
        popular: false,
    },
    Service {
        icon: "🪪",
        title: Bilingual::new("Profile Design", "تصميم البروفايلات"),
        description: Bilingual::new(
            "Modern company profiles that present your business clearly and leave a lasting impression.",
            "ملفات تعريفية عصرية تعرض نشاطك التجاري بوضوح وتترك انطباعاً دائماً.",
        ),
        features_en: &[
            "Company Profiles",
            "Portfolio Booklets",
            "Print & Digital Versions",
            "Infographics",
            "Custom Layouts",
        ],
        features_ar: &[
            "ملفات تعريف الشركات",
            "كتيبات الأعمال",
            "نسخ مطبوعة ورقمية",
            "رسوم معلوماتية",
            "تخطيطات مخصصة",
        ],
        price: Bilingual::new("Starting at $500", "ابتداءً من 500$"),
        popular: false,
    },
    Service {
        icon: "📦",
        title: Bilingual::new("Packaging Design", "تصميم التغليف"),
        description: Bilingual::new(
            "Creative and functional packaging that enhances product appeal and strengthens brand identity.",
            "تصاميم تغليف إبداعية وعملية تعزز جاذبية المنتج وتقوي هوية العلامة التجارية.",
        ),
        features_en: &[
            "Box Design",
            "Label Design",
            "Product Mockups",
            "Bag & Pouch Design",
            "Custom Die-Cuts",
            "Eco-Friendly Solutions",
        ],
        features_ar: &[
            "تصميم العلب",
            "تصميم الملصقات",
            "نماذج عرض المنتجات",
            "تصميم الأكياس والأغلفة",
            "قصات مخصصة",
            "حلول صديقة للبيئة",
        ],
        price: Bilingual::new("Starting at $50", "ابتداءً من 50$"),
        popular: false,
    },
];

const PROCESS: [(&str, Bilingual, Bilingual); 4] = [
    (
        "01",
        Bilingual::new("Consultation", "الاستشارة"),
        Bilingual::new(
            "We discuss your project requirements, goals, and vision in detail.",
            "نناقش متطلبات مشروعك وأهدافك ورؤيتك بالتفصيل.",
        ),
    ),
    (
        "02",
        Bilingual::new("Concept Development", "تطوير المفهوم"),
        Bilingual::new(
            "I create initial concepts and present multiple design directions.",
            "أنشئ المفاهيم الأولية وأقدم اتجاهات تصميم متعددة.",
        ),
    ),
    (
        "03",
        Bilingual::new("Design & Refinement", "التصميم والتحسين"),
        Bilingual::new(
            "Based on your feedback, I refine the chosen concept to perfection.",
            "بناءً على ملاحظاتك، أقوم بتحسين المفهوم المختار إلى الكمال.",
        ),
    ),
    (
        "04",
        Bilingual::new("Final Delivery", "التسليم النهائي"),
        Bilingual::new(
            "You receive all final files in various formats ready for use.",
            "تتلقى جميع الملفات النهائية بتنسيقات مختلفة جاهزة للاستخدام.",
        ),
    ),
];

const MOST_POPULAR: Bilingual = Bilingual::new("Most Popular", "الأكثر شعبية");
const GET_STARTED: Bilingual = Bilingual::new("Get Started", "ابدأ الآن");
const PROCESS_TITLE: Bilingual = Bilingual::new("My Design Process", "عملية التصميم");
const PROCESS_SUBTITLE: Bilingual = Bilingual::new(
    "A streamlined process to ensure your project is delivered on time and exceeds expectations",
    "عملية مبسطة لضمان تسليم مشروعك في الوقت المحدد وتجاوز التوقعات",
);
const CTA_TITLE: Bilingual = Bilingual::new("Ready to Get Started?", "جاهز للبدء؟");
const CTA_BODY: Bilingual = Bilingual::new(
    "Let's discuss your project and create something amazing together. Contact me for a free consultation.",
    "دعنا نناقش مشروعك وننشئ شيئاً مذهلاً معاً. تواصل معي للحصول على استشارة مجانية.",
);
const FREE_QUOTE: Bilingual = Bilingual::new("Get Free Quote", "احصل على عرض مجاني");
const WHATSAPP_CHAT: Bilingual = Bilingual::new("WhatsApp Chat", "محادثة واتساب");

#[component]
pub fn Services() -> Element {
    let prefs = use_prefs();
    let config = use_site_config();

    let language = prefs.language();
    let whatsapp = whatsapp_link(&config, None);

    rsx! {
        div { class: "page",
            div { class: "container",
                div { class: "section-header",
                    h1 { class: "page-title", {prefs.t(Key::ServicesTitle)} }
                    p { class: "section-subtitle", {prefs.t(Key::ServicesSubtitle)} }
                }

                div { class: "service-grid",
                    for service in SERVICES.iter() {
                        div {
                            key: "{service.title.en}",
                            class: if service.popular { "card service-card popular" } else { "card service-card" },
                            if service.popular {
                                span { class: "popular-badge", {prefs.text(MOST_POPULAR)} }
                            }
                            div { class: "service-icon", "{service.icon}" }
                            h3 { {prefs.text(service.title)} }
                            p { {prefs.text(service.description)} }
                            ul { class: "feature-list",
                                for feature in service.features(language).iter() {
                                    li { key: "{feature}", "{feature}" }
                                }
                            }
                            div { class: "service-price", {prefs.text(service.price)} }
                            Link {
                                to: Route::Contact {},
                                class: "btn btn-primary btn-block",
                                {prefs.text(GET_STARTED)}
                            }
                        }
                    }
                }

                section { class: "section",
                    div { class: "section-header",
                        h2 { class: "section-title", {prefs.text(PROCESS_TITLE)} }
                        p { class: "section-subtitle", {prefs.text(PROCESS_SUBTITLE)} }
                    }
                    div { class: "process-grid",
                        for (step , title , description) in PROCESS.iter() {
                            div { key: "{step}", class: "process-step",
                                div { class: "step-number", "{step}" }
                                h4 { {prefs.text(*title)} }
                                p { {prefs.text(*description)} }
                            }
                        }
                    }
                }

                div { class: "cta-band rounded",
                    h2 { {prefs.text(CTA_TITLE)} }
                    p { {prefs.text(CTA_BODY)} }
                    div { class: "cta-actions",
                        Link {
                            to: Route::Contact {},
                            class: "btn btn-light btn-lg",
                            {prefs.text(FREE_QUOTE)}
                        }
                        a {
                            class: "btn btn-light btn-lg",
                            href: "{whatsapp}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            {prefs.text(WHATSAPP_CHAT)}
                        }
                    }
                }
            }
        }
    }
}
