use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::gateway::adapter::incoming::web::routes::GatewayRoutesResponse;
use crate::gateway::application::domain::ProxyRoute;
use crate::i18n::adapter::incoming::web::routes::BundleResponse;
use crate::i18n::application::domain::Locale;
use crate::portfolio::application::domain::entities::{
    ContactLink, DateRange, Profile, Project, RangeEnd, Skill, SkillCategory, SkillGroup,
    Timeline, TimelineEntry, TimelineKind,
};
use crate::shared::cache::LoadState;
use crate::theme::application::{
    domain::Layout,
    services::ThemeSummary,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only portfolio content, translations, theme registry and gateway routing"
    ),
    paths(
        // Portfolio
        crate::portfolio::adapter::incoming::web::routes::get_profile_handler,
        crate::portfolio::adapter::incoming::web::routes::get_projects_handler,
        crate::portfolio::adapter::incoming::web::routes::get_single_project_handler,
        crate::portfolio::adapter::incoming::web::routes::get_skills_handler,
        crate::portfolio::adapter::incoming::web::routes::get_timeline_handler,

        // Translations
        crate::i18n::adapter::incoming::web::routes::get_bundle_handler,

        // Themes and gateway
        crate::theme::adapter::incoming::web::routes::get_themes_handler,
        crate::gateway::adapter::incoming::web::routes::get_routes_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            Profile,
            ContactLink,
            Project,
            Skill,
            SkillCategory,
            SkillGroup,
            Timeline,
            TimelineEntry,
            TimelineKind,
            DateRange,
            RangeEnd,

            Locale,
            BundleResponse,

            ThemeSummary,
            Layout,
            LoadState,
            GatewayRoutesResponse,
            ProxyRoute
        )
    ),
    tags(
        (name = "portfolio", description = "Profile, projects, skills and timeline"),
        (name = "i18n", description = "Translation bundles"),
        (name = "themes", description = "Theme registry"),
        (name = "gateway", description = "Gateway routing table"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
