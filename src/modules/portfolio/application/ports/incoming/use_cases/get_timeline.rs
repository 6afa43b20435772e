use async_trait::async_trait;

use crate::portfolio::application::domain::entities::Timeline;

#[async_trait]
pub trait GetTimelineUseCase: Send + Sync {
    async fn execute(&self) -> Timeline;
}
