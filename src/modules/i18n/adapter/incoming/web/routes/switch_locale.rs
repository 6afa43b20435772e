use actix_web::{get, http::header::LOCATION, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::info;

use crate::{
    i18n::{adapter::incoming::web::extractors::locale_cookie, application::domain::Locale},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SwitchLocaleQuery {
    pub next: Option<String>,
}

/// Only same-origin absolute paths are followed. Browsers drop tabs and
/// newlines from URLs, so any control or whitespace character is refused.
fn safe_redirect_target(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(|c| c.is_control() || c.is_whitespace()) =>
        {
            path
        }
        _ => "/",
    }
}

/// Stores the chosen locale and sends the visitor back to the page they
/// came from.
#[get("/locale/{lang}")]
pub async fn switch_locale_handler(
    path: web::Path<String>,
    query: web::Query<SwitchLocaleQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = safe_redirect_target(query.next.as_deref()).to_string();

    let Some(locale) = Locale::parse(&path) else {
        return HttpResponse::SeeOther()
            .insert_header((LOCATION, target))
            .finish();
    };

    info!("Locale switched to {}", locale);
    HttpResponse::SeeOther()
        .insert_header((LOCATION, target))
        .cookie(locale_cookie(&data.i18n.cookie_name, locale))
        .finish()
}
