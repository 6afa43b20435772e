use actix_web::{
    http::{
        header::{ALLOW, CONTENT_LENGTH, LOCATION},
        Method, StatusCode,
    },
    web, HttpRequest, HttpResponse,
};
use tracing::warn;

use crate::{
    gateway::{
        application::{
            domain::GatewayMode,
            ports::outgoing::{is_hop_by_hop, ForwardRequest},
        },
        ui::render_landing,
    },
    i18n::adapter::incoming::web::extractors::RequestLocale,
    shared::ui::ThemeBasePath,
    theme::{
        adapter::incoming::web::routes::{html_response, serve_theme_page},
        application::{
            domain::ThemeId,
            services::{RouteMatch, ThemeRouter},
        },
        ui::{render_fallback, FallbackReason},
    },
    AppState,
};

/// Catch-all for everything not claimed by an API route: the landing view
/// at `/`, theme pages under `/v{n}`, and the landing view with 404 for
/// anything else.
pub async fn gateway_dispatch_handler(
    req: HttpRequest,
    body: web::Bytes,
    locale: RequestLocale,
    data: web::Data<AppState>,
) -> HttpResponse {
    let mode = data.gateway.mode;
    let route = ThemeRouter::match_path(req.path());

    let readable = *req.method() == Method::GET || *req.method() == Method::HEAD;
    if mode != GatewayMode::Proxy && !readable {
        return HttpResponse::MethodNotAllowed()
            .insert_header((ALLOW, "GET, HEAD"))
            .finish();
    }

    match route {
        RouteMatch::Landing => landing(&data, &locale, false).await,
        RouteMatch::Unmatched => landing(&data, &locale, true).await,
        RouteMatch::Theme { id, tail } => match mode {
            GatewayMode::Proxy => forward(&req, body, &data, &locale, id).await,
            _ if !data.themes.is_enabled(id) => landing(&data, &locale, true).await,
            _ => serve_theme_page(&req, &data, &locale, id, &tail).await,
        },
    }
}

async fn landing(data: &AppState, locale: &RequestLocale, not_found: bool) -> HttpResponse {
    let site = ThemeBasePath::new(&data.config.public_base_path, "");

    if let (GatewayMode::Standalone(id), false) = (data.gateway.mode, not_found) {
        return HttpResponse::TemporaryRedirect()
            .insert_header((LOCATION, site.site_join(&format!("{}/", id.segment()))))
            .finish();
    }

    let themes: Vec<ThemeId> = match data.gateway.mode {
        GatewayMode::Proxy => data.gateway.table.routes().iter().map(|r| r.theme).collect(),
        _ => data.themes.enabled().collect(),
    };
    let translator = data.i18n.translations.translator(locale.locale()).await;
    let html = render_landing(&translator, &site, &themes, not_found, true);

    let status = if not_found {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    html_response(status, html, locale)
}

async fn forward(
    req: &HttpRequest,
    body: web::Bytes,
    data: &AppState,
    locale: &RequestLocale,
    id: ThemeId,
) -> HttpResponse {
    let Some(route) = data.gateway.table.route_for(id) else {
        return landing(data, locale, true).await;
    };

    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.path());
    let request = ForwardRequest {
        method: req.method().as_str().to_string(),
        url: format!("{}{}", route.target, path_and_query),
        headers: req
            .headers()
            .iter()
            .map(|(name, value)| (name.as_str().to_string(), value.as_bytes().to_vec()))
            .collect(),
        body: body.to_vec(),
    };

    match data.gateway.forwarder.forward(request).await {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            let mut response = HttpResponse::build(status);
            for (name, value) in upstream.headers {
                if !is_hop_by_hop(&name) && !name.eq_ignore_ascii_case(CONTENT_LENGTH.as_str()) {
                    response.append_header((name, value));
                }
            }
            response.body(upstream.body)
        }
        Err(err) => {
            warn!("Upstream for theme {} failed: {}", id, err);
            let reason = FallbackReason::UpstreamUnreachable;
            let translator = data.i18n.translations.translator(locale.locale()).await;
            let base = ThemeBasePath::new(&data.config.public_base_path, &id.prefix());
            html_response(
                reason.status(),
                render_fallback(&translator, &base, id, reason),
                locale,
            )
        }
    }
}
