use crate::i18n::Bilingual;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Logos,
    Branding,
    Print,
    SocialMedia,
    UiUx,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Logos => "logos",
            Self::Branding => "branding",
            Self::Print => "print",
            Self::SocialMedia => "socialmedia",
            Self::UiUx => "uiux",
        }
    }

    pub fn label(self) -> Bilingual {
        match self {
            Self::Logos => Bilingual::new("Logos", "الشعارات"),
            Self::Branding => Bilingual::new("Branding", "العلامة التجارية"),
            Self::Print => Bilingual::new("Print Design", "التصميم الطباعي"),
            Self::SocialMedia => Bilingual::new("Social Media", "تصاميم وسائل التواصل الاجتماعي"),
            Self::UiUx => Bilingual::new("UI/UX", "واجهات المستخدم"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn label(self) -> Bilingual {
        match self {
            Self::All => Bilingual::new("All Projects", "جميع المشاريع"),
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "logos" => Self::Only(Category::Logos),
            "branding" => Self::Only(Category::Branding),
            "print" => Self::Only(Category::Print),
            "socialmedia" => Self::Only(Category::SocialMedia),
            "uiux" => Self::Only(Category::UiUx),
            _ => Self::All,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: Bilingual,
    pub category: Category,
    pub image: &'static str,
    pub description: Bilingual,
    pub tags: &'static [&'static str],
}

/// Select the projects shown under `filter`, keeping their original order.
pub fn filter_projects(projects: &[Project], filter: Filter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

// the buttons shown above the portfolio grid, in display order
pub const FILTERS: &[Filter] = &[
    Filter::All,
    Filter::Only(Category::Logos),
    Filter::Only(Category::Branding),
    Filter::Only(Category::Print),
    Filter::Only(Category::SocialMedia),
];

pub const BEHANCE_MODULES: &str = "https://mir-s3-cdn-cf.behance.net/project_modules/fs_webp";

macro_rules! behance {
    ($file:literal) => {
        constcat::concat!(BEHANCE_MODULES, "/", $file)
    };
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: Bilingual::new(
            "Balsam Taiba Medical Co. Identity Design",
            "تصميم شعار وهوية شركة بلسم طيبة الطبية",
        ),
        category: Category::Branding,
        image: behance!("60f7a4214380481.675743f08799d.jpeg"),
        description: Bilingual::new(
            "Complete brand identity package for a medical company",
            "حزمة هوية تجارية كاملة لشركة طبية",
        ),
        tags: &["Branding", "Logo", "Guidelines"],
    },
    Project {
        id: 2,
        title: Bilingual::new("Caesar Restaurant Logo Brand", "تصميم شعار سلسلة مطاعم القيصر"),
        category: Category::Logos,
        image: behance!("75670b214380481.675743f088b9a.jpeg"),
        description: Bilingual::new(
            "Modern logo designs for restaurant chain",
            "تصاميم شعارات عصرية لسلسلة مطاعم",
        ),
        tags: &["Logo", "Food", "Modern"],
    },
    Project {
        id: 3,
        title: Bilingual::new("Annual Report Design", "تصميم التقرير السنوي"),
        category: Category::Print,
        image: behance!("6c98f5214380481.675743f092c71.jpeg"),
        description: Bilingual::new(
            "Professional annual report layout and design",
            "تخطيط وتصميم تقرير سنوي احترافي",
        ),
        tags: &["Print", "Layout", "Corporate"],
    },
    Project {
        id: 4,
        title: Bilingual::new("Social Media Adv", "تصاميم السوشال ميديا"),
        category: Category::SocialMedia,
        image: behance!("bed92e214380481.675743f08c922.jpeg"),
        description: Bilingual::new(
            "Expert social media design",
            "تصميم احترافي لوسائل التواصل الاجتماعي",
        ),
        tags: &["Ai/Ps", "Social", "Design"],
    },
    Project {
        id: 5,
        title: Bilingual::new(
            "Logo Brand & Identity For Ekleel Alenayah Medical Co.",
            "شعار وهوية بصرية لشركة إكليل العناية الطبية",
        ),
        category: Category::Branding,
        image: behance!("d658ae214380481.675743f07fafe.jpeg"),
        description: Bilingual::new(
            "Luxury medical brand visual identity",
            "هوية بصرية فاخرة لعلامة طبية",
        ),
        tags: &["Medical", "Luxury", "Branding"],
    },
    Project {
        id: 6,
        title: Bilingual::new("Al Khattabi Press Logo", "شعار مطابع الخطابي"),
        category: Category::Logos,
        image: behance!("063a91214380481.675743f0844b9.jpeg"),
        description: Bilingual::new(
            "Innovative logo for a printing press startup",
            "شعار مبتكر لشركة طباعة",
        ),
        tags: &["Printing", "Startup", "Materials"],
    },
    Project {
        id: 7,
        title: Bilingual::new("Bahaa Silver Logo Design", "تصميم شعار شركة بهاء الفضة"),
        category: Category::Print,
        image: behance!("c99968214380481.675743f086a49.jpeg"),
        description: Bilingual::new(
            "Creative brand logo built on typography",
            "شعار علامة تجارية إبداعي بطريقة التايبوجرافي",
        ),
        tags: &["Gold & Silver", "Typography", "Layout"],
    },
    Project {
        id: 8,
        title: Bilingual::new("Jenan Yemeni Honey Logo Design", "تصميم شعار شركة جنان للعسل اليمني"),
        category: Category::Branding,
        image: behance!("7c3596214380481.675743f08b052.jpeg"),
        description: Bilingual::new("Modern commerce branding design", "تصميم هوية تجارية عصرية"),
        tags: &["Commerce", "Branding", "Logo"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u32, category: Category) -> Project {
        Project {
            id,
            title: Bilingual::same("sample"),
            category,
            image: BEHANCE_MODULES,
            description: Bilingual::same(""),
            tags: &[],
        }
    }

    fn sample_set() -> Vec<Project> {
        use Category::*;
        [Branding, Logos, Print, UiUx, Logos, Branding, UiUx, Logos]
            .into_iter()
            .enumerate()
            .map(|(i, c)| sample(i as u32 + 1, c))
            .collect()
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_filter_logos_keeps_order() {
        let projects = sample_set();
        let logos = filter_projects(&projects, Filter::Only(Category::Logos));

        assert_eq!(ids(&logos), vec![2, 5, 8]);
        assert!(logos.iter().all(|p| p.category == Category::Logos));
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let projects = sample_set();
        let all = filter_projects(&projects, Filter::All);

        assert_eq!(ids(&all), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        let projects = sample_set();
        assert!(filter_projects(&projects, Filter::Only(Category::SocialMedia)).is_empty());
    }

    #[test]
    fn test_filter_parsing_clamps_to_all() {
        assert_eq!(Filter::from("logos".to_owned()), Filter::Only(Category::Logos));
        assert_eq!(Filter::from("UIUX".to_owned()), Filter::Only(Category::UiUx));
        assert_eq!(Filter::from("posters".to_owned()), Filter::All);
    }

    #[test]
    fn test_filter_names_round_trip() {
        for filter in FILTERS {
            assert_eq!(Filter::from(filter.as_str().to_owned()), *filter);
        }
    }

    #[test]
    fn test_site_projects() {
        assert_eq!(PROJECTS.len(), 8);
        assert_eq!(
            ids(&filter_projects(PROJECTS, Filter::Only(Category::Branding))),
            vec![1, 5, 8]
        );
        for project in PROJECTS {
            assert!(project.image.starts_with(BEHANCE_MODULES));
        }
    }
}
