use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ContactLink {
    pub platform: String,
    pub url: String,
    pub label: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Profile {
    pub name: String,
    /// Ordered translation keys for the role titles.
    pub role_keys: Vec<String>,
    pub email: String,
    pub contacts: Vec<ContactLink>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Project {
    pub id: u32,
    pub slug: String,
    pub title: String,
    /// CSS colour used as the project's accent.
    pub color: String,
    pub year: u16,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    pub summary_key: String,
}

impl Project {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Design,
    Tools,
    Soft,
}

impl SkillCategory {
    /// Display order of the skill groups.
    pub const ORDER: [SkillCategory; 3] = [Self::Design, Self::Tools, Self::Soft];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Design => "design",
            Self::Tools => "tools",
            Self::Soft => "soft",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Design => "common:skills.categories.design",
            Self::Tools => "common:skills.categories.tools",
            Self::Soft => "common:skills.categories.soft",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Skill {
    pub id: u32,
    pub name: String,
    pub category: SkillCategory,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RangeEnd {
    Current,
    Date(NaiveDate),
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: RangeEnd,
}

impl DateRange {
    pub fn is_current(&self) -> bool {
        matches!(self.end, RangeEnd::Current)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Experience,
    Education,
}

/// One experience or education entry.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TimelineEntry {
    pub id: u32,
    pub kind: TimelineKind,
    pub range: DateRange,
    /// Translation key of the role (experience) or degree (education).
    pub title_key: String,
    pub institution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Timeline {
    pub experience: Vec<TimelineEntry>,
    pub education: Vec<TimelineEntry>,
}
