use actix_web::{http::StatusCode, test, web, App};

use crate::config::AppConfig;
use crate::gateway::adapter::incoming::web::routes::gateway_dispatch_handler;
use crate::gateway::application::domain::GatewayMode;
use crate::shared::api::custom_query_config;
use crate::theme::application::domain::ThemeId;
use crate::{build_state, init_routes};

fn shipped_config() -> AppConfig {
    AppConfig {
        locales_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/locales").into(),
        themes_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/themes").into(),
        ..AppConfig::default()
    }
}

macro_rules! app {
    ($config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(build_state($config).unwrap()))
                .app_data(custom_query_config())
                .configure(init_routes)
                .default_service(web::to(gateway_dispatch_handler)),
        )
        .await
    };
}

#[actix_web::test]
async fn api_routes_win_over_the_gateway() {
    let app = app!(shipped_config());

    for uri in [
        "/health",
        "/api/themes",
        "/api/projects",
        "/api/i18n/en",
        "/api-docs/openapi.json",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }
}

#[actix_web::test]
async fn serves_shipped_themes_from_disk() {
    let app = app!(shipped_config());

    let req = test::TestRequest::get().uri("/v8/theme.css").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let css = test::read_body(resp).await;
    assert!(!css.is_empty());

    let req = test::TestRequest::get().uri("/v8/experience").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn standalone_state_enables_one_theme() {
    let config = AppConfig {
        gateway_mode: GatewayMode::Standalone(ThemeId::new(11).unwrap()),
        ..shipped_config()
    };
    let state = build_state(config).unwrap();

    let enabled: Vec<_> = state.themes.enabled().collect();
    assert_eq!(enabled, vec![ThemeId::new(11).unwrap()]);
    assert_eq!(state.gateway.table.routes().len(), 15);
}

#[actix_web::test]
async fn unknown_api_path_is_handled_by_the_gateway() {
    let app = app!(shipped_config());

    let req = test::TestRequest::get().uri("/nowhere").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
