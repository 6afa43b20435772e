use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::schemas::SuccessResponse,
    portfolio::application::{
        domain::entities::Project, ports::incoming::use_cases::ProjectFilter,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProjectsQuery {
    /// Only projects tagged with this category (case-insensitive)
    pub category: Option<String>,
    /// Only projects from this year
    pub year: Option<u16>,
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "portfolio",
    params(ProjectsQuery),
    responses(
        (
            status = 200,
            description = "Projects in display order",
            body = inline(SuccessResponse<Vec<Project>>)
        ),
        (status = 400, description = "Malformed query", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let projects = data
        .portfolio
        .get_projects
        .execute(ProjectFilter {
            category: query.category.filter(|c| !c.trim().is_empty()),
            year: query.year,
        })
        .await;

    ApiResponse::success(projects)
}
