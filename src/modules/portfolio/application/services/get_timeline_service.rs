use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::{
    domain::{entities::Timeline, PortfolioCatalog},
    ports::incoming::use_cases::GetTimelineUseCase,
};

#[derive(Debug, Clone)]
pub struct GetTimelineService {
    catalog: Arc<PortfolioCatalog>,
}

impl GetTimelineService {
    pub fn new(catalog: Arc<PortfolioCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl GetTimelineUseCase for GetTimelineService {
    async fn execute(&self) -> Timeline {
        self.catalog.timeline()
    }
}
