use actix_web::{
    http::{
        header::{ContentType, LOCATION},
        StatusCode,
    },
    HttpRequest, HttpResponse,
};

use crate::{
    i18n::adapter::incoming::web::extractors::RequestLocale,
    shared::ui::ThemeBasePath,
    theme::{
        application::domain::{ThemeId, ThemePage},
        ui::{render_fallback, render_page, FallbackReason, PageContext},
    },
    AppState,
};

/// HTML response that also persists the resolved locale when needed.
pub fn html_response(status: StatusCode, html: String, locale: &RequestLocale) -> HttpResponse {
    let mut response = HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(html);
    locale.persist_on(&mut response);
    response
}

/// Serves a request under `/v{n}` from the in-process theme.
///
/// The theme is loaded on its first request. If that load fails only this
/// theme answers with a fallback page; the next request tries again.
pub async fn serve_theme_page(
    req: &HttpRequest,
    data: &AppState,
    locale: &RequestLocale,
    id: ThemeId,
    tail: &str,
) -> HttpResponse {
    let base = ThemeBasePath::new(&data.config.public_base_path, &id.prefix());

    if tail.is_empty() {
        let mut location = base.root();
        if !req.query_string().is_empty() {
            location.push('?');
            location.push_str(req.query_string());
        }
        return HttpResponse::PermanentRedirect()
            .insert_header((LOCATION, location))
            .finish();
    }

    let translator = data.i18n.translations.translator(locale.locale()).await;
    let theme = match data.themes.load(id).await {
        Ok(theme) => theme,
        Err(_) => {
            let reason = FallbackReason::LoadFailed;
            let html = render_fallback(&translator, &base, id, reason);
            return html_response(reason.status(), html, locale);
        }
    };

    let page = ThemePage::parse(tail);
    if page == ThemePage::Stylesheet {
        return HttpResponse::Ok()
            .content_type("text/css; charset=utf-8")
            .body(theme.stylesheet.clone());
    }

    let rendered = render_page(
        &PageContext {
            theme: &theme,
            catalog: &data.catalog,
            t: &translator,
            base: &base,
            locale_switch: true,
        },
        &page,
    );
    let status = if rendered.found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    html_response(status, rendered.html, locale)
}
