use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::{
    domain::{entities::Profile, PortfolioCatalog},
    ports::incoming::use_cases::GetProfileUseCase,
};

#[derive(Debug, Clone)]
pub struct GetProfileService {
    catalog: Arc<PortfolioCatalog>,
}

impl GetProfileService {
    pub fn new(catalog: Arc<PortfolioCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl GetProfileUseCase for GetProfileService {
    async fn execute(&self) -> Profile {
        self.catalog.profile().clone()
    }
}
