mod get_profile;
mod get_projects;
mod get_single_project;
mod get_skills;
mod get_timeline;

pub use get_profile::*;
pub use get_projects::*;
pub use get_single_project::*;
pub use get_skills::*;
pub use get_timeline::*;
