use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::{
    domain::{entities::SkillGroup, PortfolioCatalog},
    ports::incoming::use_cases::GetSkillGroupsUseCase,
};

#[derive(Debug, Clone)]
pub struct GetSkillGroupsService {
    catalog: Arc<PortfolioCatalog>,
}

impl GetSkillGroupsService {
    pub fn new(catalog: Arc<PortfolioCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl GetSkillGroupsUseCase for GetSkillGroupsService {
    async fn execute(&self) -> Vec<SkillGroup> {
        self.catalog.skill_groups()
    }
}
