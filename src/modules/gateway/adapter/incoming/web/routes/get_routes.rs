use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::SuccessResponse,
    gateway::application::domain::ProxyRoute,
    shared::api::ApiResponse,
    theme::application::domain::ThemeId,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct GatewayRoutesResponse {
    /// `bundled`, `standalone` or `proxy`
    pub mode: String,
    #[schema(value_type = Option<u8>)]
    pub standalone_theme: Option<ThemeId>,
    pub routes: Vec<ProxyRoute>,
}

#[utoipa::path(
    get,
    path = "/api/gateway/routes",
    tag = "gateway",
    responses(
        (
            status = 200,
            description = "Development proxy table",
            body = inline(SuccessResponse<GatewayRoutesResponse>)
        )
    )
)]
#[get("/api/gateway/routes")]
pub async fn get_routes_handler(data: web::Data<AppState>) -> impl Responder {
    let gateway = &data.gateway;
    ApiResponse::success(GatewayRoutesResponse {
        mode: gateway.mode.as_str().to_string(),
        standalone_theme: gateway.mode.standalone_theme(),
        routes: gateway.table.routes().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::gateway::application::domain::GatewayMode;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn lists_the_proxy_table() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(get_routes_handler)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/gateway/routes").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["mode"], "bundled");
        assert!(json["data"]["standalone_theme"].is_null());
        assert_eq!(json["data"]["routes"].as_array().map(Vec::len), Some(15));
        assert_eq!(json["data"]["routes"][2]["prefix"], "/v3");
        assert_eq!(json["data"]["routes"][2]["port"], 3003);
        assert_eq!(json["data"]["routes"][2]["target"], "http://127.0.0.1:3003");
    }

    #[actix_web::test]
    async fn reports_standalone_theme() {
        let state = TestAppStateBuilder::default()
            .with_gateway_mode(GatewayMode::Standalone(ThemeId::new(6).unwrap()))
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_routes_handler)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/gateway/routes").to_request(),
        )
        .await;

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["mode"], "standalone");
        assert_eq!(json["data"]["standalone_theme"], 6);
    }
}
