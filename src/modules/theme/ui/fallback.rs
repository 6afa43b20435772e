use actix_web::http::StatusCode;

use crate::{
    i18n::application::services::Translator,
    shared::ui::{escape, scroll_to_top, ThemeBasePath},
    theme::application::domain::{ThemeId, ThemeKind},
};

/// Why a theme could not be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The theme's assets failed to load in this process.
    LoadFailed,
    /// The theme's upstream server did not answer.
    UpstreamUnreachable,
}

impl FallbackReason {
    pub fn status(self) -> StatusCode {
        match self {
            Self::LoadFailed => StatusCode::SERVICE_UNAVAILABLE,
            Self::UpstreamUnreachable => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Stand-in page for a theme that cannot be shown. Only that theme's
/// subtree is affected; the page links back to the landing view.
pub fn render_fallback(
    t: &Translator,
    base: &ThemeBasePath,
    id: ThemeId,
    reason: FallbackReason,
) -> String {
    let name = ThemeKind::for_id(id).name();
    format!(
        concat!(
            "<!doctype html><html lang=\"{lang}\"><head><meta charset=\"utf-8\">",
            "<title>{title}</title></head>",
            "<body class=\"theme-fallback\" data-theme-fallback=\"{id}\" data-reason=\"{reason}\">",
            "<main><h1>{title}</h1><p>{message}</p>",
            "<p><a href=\"{retry_href}\">{retry}</a> · <a href=\"{home_href}\">{home}</a></p>",
            "</main>{scroll}</body></html>"
        ),
        lang = t.locale(),
        title = escape(&t.t("common:fallback.title")),
        id = id,
        reason = match reason {
            FallbackReason::LoadFailed => "load_failed",
            FallbackReason::UpstreamUnreachable => "upstream_unreachable",
        },
        message = escape(&t.t_with("common:fallback.message", &[("theme", name)])),
        retry_href = escape(&base.root()),
        retry = escape(&t.t("common:fallback.retry")),
        home_href = escape(&base.site_root()),
        home = escape(&t.t("common:footer.all_themes")),
        scroll = scroll_to_top(),
    )
}
