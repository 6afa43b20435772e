use std::sync::Arc;

use crate::portfolio::application::{
    domain::PortfolioCatalog,
    ports::incoming::use_cases::{
        GetProfileUseCase, GetProjectsUseCase, GetSingleProjectUseCase, GetSkillGroupsUseCase,
        GetTimelineUseCase,
    },
    services::{
        GetProfileService, GetProjectsService, GetSingleProjectService, GetSkillGroupsService,
        GetTimelineService,
    },
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single_project: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub get_skill_groups: Arc<dyn GetSkillGroupsUseCase + Send + Sync>,
    pub get_timeline: Arc<dyn GetTimelineUseCase + Send + Sync>,
}

impl PortfolioUseCases {
    pub fn from_catalog(catalog: Arc<PortfolioCatalog>) -> Self {
        Self {
            get_profile: Arc::new(GetProfileService::new(Arc::clone(&catalog))),
            get_projects: Arc::new(GetProjectsService::new(Arc::clone(&catalog))),
            get_single_project: Arc::new(GetSingleProjectService::new(Arc::clone(&catalog))),
            get_skill_groups: Arc::new(GetSkillGroupsService::new(Arc::clone(&catalog))),
            get_timeline: Arc::new(GetTimelineService::new(catalog)),
        }
    }
}
