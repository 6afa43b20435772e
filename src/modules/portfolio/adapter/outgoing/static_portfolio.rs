use chrono::NaiveDate;

use crate::portfolio::application::{
    domain::{
        entities::{
            ContactLink, DateRange, Profile, Project, RangeEnd, Skill, SkillCategory,
            TimelineEntry, TimelineKind,
        },
        CatalogError, PortfolioCatalog,
    },
    ports::outgoing::PortfolioSource,
};

/// The built-in portfolio content compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct StaticPortfolioSource;

impl PortfolioSource for StaticPortfolioSource {
    fn load(&self) -> Result<PortfolioCatalog, CatalogError> {
        PortfolioCatalog::new(profile(), projects(), skills(), experience(), education())
    }
}

fn profile() -> Profile {
    Profile {
        name: "Chiara Lombardi".to_string(),
        role_keys: vec![
            "profile:roles.product_designer".to_string(),
            "profile:roles.ux_researcher".to_string(),
            "profile:roles.illustrator".to_string(),
        ],
        email: "hello@chiaralombardi.example".to_string(),
        contacts: vec![
            contact("linkedin", "https://www.linkedin.com/in/chiaralombardi", "LinkedIn"),
            contact("behance", "https://www.behance.net/chiaralombardi", "Behance"),
            contact("dribbble", "https://dribbble.com/chiaralombardi", "Dribbble"),
            contact("instagram", "https://www.instagram.com/chiara.draws", "Instagram"),
        ],
    }
}

fn contact(platform: &str, url: &str, label: &str) -> ContactLink {
    ContactLink {
        platform: platform.to_string(),
        url: url.to_string(),
        label: label.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: u32,
    slug: &str,
    title: &str,
    color: &str,
    year: u16,
    categories: &[&str],
    client: Option<&str>,
) -> Project {
    Project {
        id,
        slug: slug.to_string(),
        title: title.to_string(),
        color: color.to_string(),
        year,
        categories: categories.iter().map(|c| c.to_string()).collect(),
        client: client.map(str::to_string),
        summary_key: format!("projects:items.{}.summary", slug.replace('-', "_")),
    }
}

fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "atlas-banking",
            "Atlas Banking",
            "#2f5bea",
            2024,
            &["UX", "Mobile"],
            Some("Banca Atlas"),
        ),
        project(
            2,
            "verde-market",
            "Verde Market",
            "#3a9d5d",
            2023,
            &["Branding", "E-commerce"],
            Some("Verde S.r.l."),
        ),
        project(
            3,
            "museo-digitale",
            "Museo Digitale",
            "#b0413e",
            2023,
            &["UX", "Web"],
            Some("Fondazione Arte Viva"),
        ),
        project(4, "lumen-identity", "Lumen", "#f2b134", 2022, &["Branding"], None),
        project(
            5,
            "transit-wayfinding",
            "Transit Wayfinding",
            "#1c1c1c",
            2021,
            &["Signage", "Research"],
            Some("Comune di Bologna"),
        ),
        project(6, "nido-home", "Nido Home", "#c47ac0", 2021, &["UX", "IoT"], None),
    ]
}

fn skills() -> Vec<Skill> {
    let entries: [(&str, SkillCategory); 14] = [
        ("UI Design", SkillCategory::Design),
        ("UX Research", SkillCategory::Design),
        ("Prototyping", SkillCategory::Design),
        ("Design Systems", SkillCategory::Design),
        ("Typography", SkillCategory::Design),
        ("Figma", SkillCategory::Tools),
        ("Adobe Illustrator", SkillCategory::Tools),
        ("Adobe Photoshop", SkillCategory::Tools),
        ("Blender", SkillCategory::Tools),
        ("Webflow", SkillCategory::Tools),
        ("Problem solving", SkillCategory::Soft),
        ("Teamwork", SkillCategory::Soft),
        ("Public speaking", SkillCategory::Soft),
        ("Mentoring", SkillCategory::Soft),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (name, category))| Skill {
            id: i as u32 + 1,
            name: name.to_string(),
            category: *category,
        })
        .collect()
}

fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

fn experience() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            id: 1,
            kind: TimelineKind::Experience,
            range: DateRange {
                start: month(2022, 3),
                end: RangeEnd::Current,
            },
            title_key: "experience:entries.1.title".to_string(),
            institution: "Studio Forma".to_string(),
            grade: None,
        },
        TimelineEntry {
            id: 2,
            kind: TimelineKind::Experience,
            range: DateRange {
                start: month(2019, 9),
                end: RangeEnd::Date(month(2022, 2)),
            },
            title_key: "experience:entries.2.title".to_string(),
            institution: "Pixel & Co.".to_string(),
            grade: None,
        },
        TimelineEntry {
            id: 3,
            kind: TimelineKind::Experience,
            range: DateRange {
                start: month(2018, 6),
                end: RangeEnd::Date(month(2019, 8)),
            },
            title_key: "experience:entries.3.title".to_string(),
            institution: "Freelance".to_string(),
            grade: None,
        },
    ]
}

fn education() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            id: 4,
            kind: TimelineKind::Education,
            range: DateRange {
                start: month(2016, 10),
                end: RangeEnd::Date(month(2018, 7)),
            },
            title_key: "experience:entries.4.title".to_string(),
            institution: "Politecnico di Milano".to_string(),
            grade: Some("110/110 e lode".to_string()),
        },
        TimelineEntry {
            id: 5,
            kind: TimelineKind::Education,
            range: DateRange {
                start: month(2013, 10),
                end: RangeEnd::Date(month(2016, 7)),
            },
            title_key: "experience:entries.5.title".to_string(),
            institution: "ISIA Urbino".to_string(),
            grade: Some("108/110".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn built_in_data_forms_a_valid_catalog() {
        let catalog = StaticPortfolioSource.load().expect("static data must validate");

        assert_eq!(catalog.profile().name, "Chiara Lombardi");
        assert_eq!(catalog.projects().len(), 6);
        assert_eq!(catalog.experience().len(), 3);
        assert_eq!(catalog.education().len(), 2);
    }

    #[test]
    fn built_in_slugs_are_unique() {
        let catalog = StaticPortfolioSource.load().unwrap();
        let slugs: HashSet<_> = catalog.projects().iter().map(|p| &p.slug).collect();
        assert_eq!(slugs.len(), catalog.projects().len());
    }

    #[test]
    fn built_in_skills_cover_every_category() {
        let catalog = StaticPortfolioSource.load().unwrap();
        assert_eq!(catalog.skill_groups().len(), SkillCategory::ORDER.len());
    }

    #[test]
    fn only_the_first_job_is_current() {
        let catalog = StaticPortfolioSource.load().unwrap();
        let current: Vec<_> = catalog
            .experience()
            .iter()
            .filter(|e| e.range.is_current())
            .map(|e| e.id)
            .collect();
        assert_eq!(current, vec![1]);
    }
}
