use std::collections::HashSet;

use crate::portfolio::application::domain::entities::{
    Profile, Project, Skill, SkillCategory, SkillGroup, Timeline, TimelineEntry, TimelineKind,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate project slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid project slug: {0:?}")]
    InvalidSlug(String),

    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: u32 },

    #[error("Timeline entry {id} is filed under the wrong section")]
    MisplacedTimelineEntry { id: u32 },
}

/// The shared, theme-agnostic portfolio data.
///
/// Built once at startup and shared read-only by every theme. Construction
/// validates that project slugs are usable as unique route keys and that
/// ids are unique within each collection.
#[derive(Debug, Clone)]
pub struct PortfolioCatalog {
    profile: Profile,
    projects: Vec<Project>,
    skills: Vec<Skill>,
    experience: Vec<TimelineEntry>,
    education: Vec<TimelineEntry>,
}

impl PortfolioCatalog {
    pub fn new(
        profile: Profile,
        projects: Vec<Project>,
        skills: Vec<Skill>,
        experience: Vec<TimelineEntry>,
        education: Vec<TimelineEntry>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !is_valid_slug(&project.slug) {
                return Err(CatalogError::InvalidSlug(project.slug.clone()));
            }
            if !seen.insert(project.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(project.slug.clone()));
            }
        }

        let duplicate = first_duplicate(projects.iter().map(|p| p.id))
            .map(|id| ("project", id))
            .or_else(|| first_duplicate(skills.iter().map(|s| s.id)).map(|id| ("skill", id)))
            // Timeline ids key the shared `experience:entries.{id}` namespace.
            .or_else(|| {
                first_duplicate(experience.iter().chain(&education).map(|e| e.id))
                    .map(|id| ("timeline", id))
            });
        if let Some((collection, id)) = duplicate {
            return Err(CatalogError::DuplicateId { collection, id });
        }

        let misplaced = experience
            .iter()
            .find(|e| e.kind != TimelineKind::Experience)
            .or_else(|| education.iter().find(|e| e.kind != TimelineKind::Education));
        if let Some(entry) = misplaced {
            return Err(CatalogError::MisplacedTimelineEntry { id: entry.id });
        }

        Ok(Self {
            profile,
            projects,
            skills,
            experience,
            education,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Projects in display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Skills grouped by category in `SkillCategory::ORDER`, keeping the
    /// input order inside each group. Empty groups are omitted.
    pub fn skill_groups(&self) -> Vec<SkillGroup> {
        SkillCategory::ORDER
            .iter()
            .map(|category| SkillGroup {
                category: *category,
                skills: self
                    .skills
                    .iter()
                    .filter(|s| s.category == *category)
                    .cloned()
                    .collect(),
            })
            .filter(|group| !group.skills.is_empty())
            .collect()
    }

    pub fn experience(&self) -> &[TimelineEntry] {
        &self.experience
    }

    pub fn education(&self) -> &[TimelineEntry] {
        &self.education
    }

    pub fn timeline(&self) -> Timeline {
        Timeline {
            experience: self.experience.clone(),
            education: self.education.clone(),
        }
    }

    /// Every translation key referenced by the data itself.
    pub fn translation_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.profile.role_keys.iter().map(String::as_str).collect();
        keys.extend(self.projects.iter().map(|p| p.summary_key.as_str()));
        keys.extend(
            self.experience
                .iter()
                .chain(self.education.iter())
                .map(|e| e.title_key.as_str()),
        );
        keys.extend(SkillCategory::ORDER.iter().map(|c| c.label_key()));
        keys
    }
}

fn first_duplicate(mut ids: impl Iterator<Item = u32>) -> Option<u32> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
