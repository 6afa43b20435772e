use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::{
    domain::{entities::Project, PortfolioCatalog},
    ports::incoming::use_cases::{GetProjectsUseCase, ProjectFilter},
};

#[derive(Debug, Clone)]
pub struct GetProjectsService {
    catalog: Arc<PortfolioCatalog>,
}

impl GetProjectsService {
    pub fn new(catalog: Arc<PortfolioCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl GetProjectsUseCase for GetProjectsService {
    async fn execute(&self, filter: ProjectFilter) -> Vec<Project> {
        self.catalog
            .projects()
            .iter()
            .filter(|p| {
                filter
                    .category
                    .as_deref()
                    .map_or(true, |category| p.has_category(category))
            })
            .filter(|p| filter.year.map_or(true, |year| p.year == year))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{project, sample_profile};

    fn service() -> GetProjectsService {
        let mut atlas = project(1, "atlas");
        atlas.categories = vec!["UX".into(), "Mobile".into()];
        atlas.year = 2023;
        let mut verde = project(2, "verde-market");
        verde.categories = vec!["Branding".into()];
        verde.year = 2022;
        let mut museo = project(3, "museo-digitale");
        museo.categories = vec!["ux".into()];
        museo.year = 2022;

        let projects = vec![atlas, verde, museo];
        let catalog =
            PortfolioCatalog::new(sample_profile(), projects, vec![], vec![], vec![]).unwrap();
        GetProjectsService::new(Arc::new(catalog))
    }

    #[tokio::test]
    async fn returns_all_projects_in_display_order_without_filter() {
        let projects = service().execute(ProjectFilter::default()).await;

        let slugs: Vec<_> = projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["atlas", "verde-market", "museo-digitale"]);
    }

    #[tokio::test]
    async fn filters_by_category_case_insensitively() {
        let projects = service()
            .execute(ProjectFilter {
                category: Some("UX".into()),
                year: None,
            })
            .await;

        let ids: Vec<_> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn combines_category_and_year() {
        let projects = service()
            .execute(ProjectFilter {
                category: Some("ux".into()),
                year: Some(2022),
            })
            .await;

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].slug, "museo-digitale");
    }
}
