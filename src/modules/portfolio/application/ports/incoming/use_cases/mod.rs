mod get_profile;
mod get_projects;
mod get_single_project;
mod get_skill_groups;
mod get_timeline;

pub use get_profile::GetProfileUseCase;
pub use get_projects::{GetProjectsUseCase, ProjectFilter};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use get_skill_groups::GetSkillGroupsUseCase;
pub use get_timeline::GetTimelineUseCase;
