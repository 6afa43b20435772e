use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::shared::cache::LoadState;
use crate::theme::application::services::ThemeSummary;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    default_locale: &'static str,
    translations: LoadState,
    themes: Vec<ThemeSummary>,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Ready once the default locale's translations are loaded
/// - Reports theme load states; a theme that is not loaded yet does not block
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let locale = data.i18n.resolver.default_locale();
    let state = data.i18n.translations.state(locale);

    let ready = state == LoadState::Loaded;
    let body = ReadinessResponse {
        status: if ready { "ok" } else { "unhealthy" },
        default_locale: locale.as_str(),
        translations: state,
        themes: data.themes.summaries(),
    };

    if ready {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
