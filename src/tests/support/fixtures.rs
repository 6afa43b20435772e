use chrono::NaiveDate;

use crate::portfolio::application::domain::entities::{
    ContactLink, DateRange, Profile, Project, RangeEnd, Skill, SkillCategory, TimelineEntry,
    TimelineKind,
};

pub fn sample_profile() -> Profile {
    Profile {
        name: "Test Designer".to_string(),
        role_keys: vec!["profile:roles.product_designer".to_string()],
        email: "designer@example.com".to_string(),
        contacts: vec![ContactLink {
            platform: "behance".to_string(),
            url: "https://www.behance.net/test".to_string(),
            label: "Behance".to_string(),
        }],
    }
}

pub fn project(id: u32, slug: &str) -> Project {
    Project {
        id,
        slug: slug.to_string(),
        title: format!("Project {id}"),
        color: "#2f5bea".to_string(),
        year: 2024,
        categories: vec!["UX".to_string()],
        client: None,
        summary_key: format!("projects:items.{}.summary", slug.replace('-', "_")),
    }
}

pub fn skill(id: u32, name: &str, category: SkillCategory) -> Skill {
    Skill {
        id,
        name: name.to_string(),
        category,
    }
}

pub fn timeline_entry(id: u32, kind: TimelineKind) -> TimelineEntry {
    TimelineEntry {
        id,
        kind,
        range: DateRange {
            start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end: RangeEnd::Date(NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()),
        },
        title_key: format!("experience:entries.{id}.title"),
        institution: "Studio".to_string(),
        grade: None,
    }
}
