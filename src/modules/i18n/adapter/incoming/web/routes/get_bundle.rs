use std::collections::BTreeMap;

use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    i18n::application::domain::Locale,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct BundleResponse {
    pub locale: Locale,
    pub fallback: Locale,
    /// Flattened `namespace:dotted.path` → text
    pub entries: BTreeMap<String, String>,
}

#[utoipa::path(
    get,
    path = "/api/i18n/{lang}",
    tag = "i18n",
    params(("lang" = String, Path, description = "Locale code, e.g. `it` or `en`")),
    responses(
        (
            status = 200,
            description = "Translation bundle",
            body = inline(SuccessResponse<BundleResponse>)
        ),
        (status = 404, description = "Unsupported locale", body = ErrorResponse),
        (status = 503, description = "Bundle could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/i18n/{lang}")]
pub async fn get_bundle_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(locale) = Locale::parse(&path) else {
        return ApiResponse::not_found("LOCALE_NOT_SUPPORTED", "Locale not supported");
    };

    let translations = &data.i18n.translations;
    match translations.bundle(locale).await {
        Ok(bundle) => ApiResponse::success(BundleResponse {
            locale,
            fallback: translations.fallback_locale(),
            entries: bundle.to_sorted_map(),
        }),
        Err(err) => {
            error!("Failed to load translations for {}: {}", locale, err);
            ApiResponse::service_unavailable("BUNDLE_UNAVAILABLE", "Translations unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubBundleSource;

    #[actix_web::test]
    async fn returns_flattened_bundle() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(get_bundle_handler)).await;

        let req = test::TestRequest::get().uri("/api/i18n/en").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["locale"], "en");
        assert_eq!(json["data"]["fallback"], "it");
        assert_eq!(json["data"]["entries"]["common:nav.home"], "Home");
    }

    #[actix_web::test]
    async fn unsupported_locale_is_404() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(get_bundle_handler)).await;

        let req = test::TestRequest::get().uri("/api/i18n/fr").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn load_failure_is_503() {
        let state = TestAppStateBuilder::default()
            .with_bundle_source(StubBundleSource::failing())
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_bundle_handler)).await;

        let req = test::TestRequest::get().uri("/api/i18n/it").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "BUNDLE_UNAVAILABLE");
    }
}
