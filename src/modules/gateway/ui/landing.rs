use crate::{
    i18n::application::{domain::SUPPORTED_LOCALES, services::Translator},
    shared::ui::{escape, scroll_to_top, ThemeBasePath},
    theme::application::domain::{ThemeId, ThemeKind},
};

pub const LANDING_KEYS: &[&str] = &[
    "common:landing.title",
    "common:landing.subtitle",
    "common:landing.open",
    "common:landing.not_found",
    "common:locale.label",
];

/// The gateway landing view: one link per theme. `not_found` adds a notice
/// for requests that matched no route.
pub fn render_landing(
    t: &Translator,
    site: &ThemeBasePath,
    themes: &[ThemeId],
    not_found: bool,
    locale_switch: bool,
) -> String {
    let cards: String = themes
        .iter()
        .map(|id| {
            let kind = ThemeKind::for_id(*id);
            let palette = kind.palette();
            format!(
                "<li data-theme-link=\"{id}\" style=\"--bg:{};--accent:{}\"><a href=\"{}\" aria-label=\"{}\"><span class=\"id\">{id}</span><span class=\"name\">{}</span><span class=\"layout\">{}</span></a></li>",
                palette.background,
                palette.accent,
                escape(&site.site_join(&format!("{}/", id.segment()))),
                escape(&t.t_with("common:landing.open", &[("theme", kind.name())])),
                escape(kind.name()),
                kind.layout().as_str(),
            )
        })
        .collect();

    let notice = if not_found {
        format!(
            "<p class=\"notice\" role=\"status\">{}</p>",
            escape(&t.t("common:landing.not_found"))
        )
    } else {
        String::new()
    };

    let switch = if locale_switch {
        let links: String = SUPPORTED_LOCALES
            .iter()
            .map(|locale| {
                format!(
                    "<a href=\"{}\" hreflang=\"{lang}\" lang=\"{lang}\">{}</a>",
                    escape(&format!(
                        "{}?next={}",
                        site.site_join(&format!("locale/{}", locale.as_str())),
                        site.site_root()
                    )),
                    escape(locale.native_name()),
                    lang = locale.as_str(),
                )
            })
            .collect();
        format!(
            "<nav class=\"locale-switch\" aria-label=\"{}\">{links}</nav>",
            escape(&t.t("common:locale.label"))
        )
    } else {
        String::new()
    };

    format!(
        concat!(
            "<!doctype html><html lang=\"{lang}\"><head><meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>{title}</title></head><body class=\"gateway\">",
            "<header><h1>{title}</h1><p>{subtitle}</p>{switch}</header>",
            "<main>{notice}<ul class=\"themes\">{cards}</ul></main>{scroll}</body></html>"
        ),
        lang = t.locale(),
        title = escape(&t.t("common:landing.title")),
        subtitle = escape(&t.t("common:landing.subtitle")),
        switch = switch,
        notice = notice,
        cards = cards,
        scroll = scroll_to_top(),
    )
}
