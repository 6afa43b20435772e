mod get_profile_service;
mod get_projects_service;
mod get_single_project_service;
mod get_skill_groups_service;
mod get_timeline_service;

pub use get_profile_service::GetProfileService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use get_skill_groups_service::GetSkillGroupsService;
pub use get_timeline_service::GetTimelineService;
