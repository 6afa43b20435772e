use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::{
    domain::{entities::Project, PortfolioCatalog},
    ports::incoming::use_cases::{GetSingleProjectError, GetSingleProjectUseCase},
};

#[derive(Debug, Clone)]
pub struct GetSingleProjectService {
    catalog: Arc<PortfolioCatalog>,
}

impl GetSingleProjectService {
    pub fn new(catalog: Arc<PortfolioCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl GetSingleProjectUseCase for GetSingleProjectService {
    async fn execute(&self, slug: &str) -> Result<Project, GetSingleProjectError> {
        self.catalog
            .project_by_slug(slug.trim())
            .cloned()
            .ok_or(GetSingleProjectError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{project, sample_profile};

    fn service() -> GetSingleProjectService {
        let catalog = PortfolioCatalog::new(
            sample_profile(),
            vec![project(1, "atlas"), project(2, "lumen")],
            vec![],
            vec![],
            vec![],
        )
        .unwrap();
        GetSingleProjectService::new(Arc::new(catalog))
    }

    #[tokio::test]
    async fn resolves_slug_to_exactly_one_project() {
        let result = service().execute("lumen").await;
        assert_eq!(result.unwrap().id, 2);
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let result = service().execute("nope").await;
        assert_eq!(result, Err(GetSingleProjectError::NotFound));
    }
}
