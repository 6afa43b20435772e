use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse,
    shared::api::ApiResponse,
    theme::application::services::ThemeSummary,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/themes",
    tag = "themes",
    responses(
        (
            status = 200,
            description = "Enabled themes with their load state",
            body = inline(SuccessResponse<Vec<ThemeSummary>>)
        )
    )
)]
#[get("/api/themes")]
pub async fn get_themes_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.themes.summaries())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn lists_every_enabled_theme_as_not_loaded() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(get_themes_handler)).await;

        let req = test::TestRequest::get().uri("/api/themes").to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        let themes = json["data"].as_array().unwrap();
        assert_eq!(themes.len(), 15);
        assert_eq!(themes[0]["id"], 1);
        assert_eq!(themes[0]["prefix"], "/v1");
        assert_eq!(themes[0]["state"], "not_loaded");
        assert_eq!(themes[3]["layout"], "console");
    }

    #[actix_web::test]
    async fn standalone_registry_lists_one_theme() {
        let state = TestAppStateBuilder::default().with_enabled_themes([6]).build();
        let app = test::init_service(App::new().app_data(state).service(get_themes_handler)).await;

        let req = test::TestRequest::get().uri("/api/themes").to_request();

        let resp = test::call_service(&app, req).await;

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["data"][0]["slug"], "neon");
    }
}
