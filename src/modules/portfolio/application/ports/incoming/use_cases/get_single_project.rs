use async_trait::async_trait;

use crate::portfolio::application::domain::entities::Project;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Project, GetSingleProjectError>;
}
