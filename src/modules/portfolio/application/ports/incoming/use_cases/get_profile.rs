use async_trait::async_trait;

use crate::portfolio::application::domain::entities::Profile;

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Profile;
}
