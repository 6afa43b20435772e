use async_trait::async_trait;

use crate::portfolio::application::domain::entities::Project;

#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub category: Option<String>,
    pub year: Option<u16>,
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    /// Projects in display order, narrowed by the filter.
    async fn execute(&self, filter: ProjectFilter) -> Vec<Project>;
}
