use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    portfolio::application::{
        domain::entities::Project, ports::incoming::use_cases::GetSingleProjectError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    tag = "portfolio",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project detail", body = inline(SuccessResponse<Project>)),
        (status = 404, description = "No project with this slug", body = ErrorResponse)
    )
)]
#[get("/api/projects/{slug}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.portfolio.get_single_project.execute(&slug).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn returns_project_for_known_slug() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_single_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/museo-digitale")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["title"], "Museo Digitale");
        assert_eq!(json["data"]["client"], "Fondazione Arte Viva");
    }

    #[actix_web::test]
    async fn unknown_slug_is_404() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_single_project_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects/ghost").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
