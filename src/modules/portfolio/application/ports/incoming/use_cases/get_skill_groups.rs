use async_trait::async_trait;

use crate::portfolio::application::domain::entities::SkillGroup;

#[async_trait]
pub trait GetSkillGroupsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<SkillGroup>;
}
