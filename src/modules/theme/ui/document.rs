use chrono::Datelike;

use crate::{
    i18n::application::{domain::SUPPORTED_LOCALES, services::Translator},
    portfolio::application::domain::PortfolioCatalog,
    shared::ui::{escape, scroll_to_top, ThemeBasePath, ThemeLink},
    theme::application::domain::{Layout, LoadedTheme, ThemePage, NAV_PAGES, STYLESHEET_FILE},
};

use super::sections;

/// Everything a theme needs to render one page.
pub struct PageContext<'a> {
    pub theme: &'a LoadedTheme,
    pub catalog: &'a PortfolioCatalog,
    pub t: &'a Translator,
    pub base: &'a ThemeBasePath,
    /// Render links to the server-side locale switch. Off for static exports.
    pub locale_switch: bool,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    /// `false` when the theme's not-found view was rendered instead.
    pub found: bool,
}

pub fn render_page(ctx: &PageContext<'_>, page: &ThemePage) -> RenderedPage {
    let (blocks, found) = match sections::blocks_for(ctx, page) {
        Some(blocks) => (blocks, true),
        None => (sections::not_found(ctx), false),
    };
    let title_key = if found {
        page.title_key()
    } else {
        ThemePage::NotFound.title_key()
    };

    let main = sections::arrange(ctx.theme.kind.layout(), &blocks);
    let html = document(ctx, page, &ctx.t.t(title_key), &main);
    RenderedPage { html, found }
}

fn document(ctx: &PageContext<'_>, page: &ThemePage, title: &str, main: &str) -> String {
    let kind = ctx.theme.kind;
    let palette = kind.palette();
    let profile = ctx.catalog.profile();

    format!(
        concat!(
            "<!doctype html><html lang=\"{lang}\"><head><meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>{title} · {name}</title>",
            "<link rel=\"stylesheet\" href=\"{css}\">",
            "<style>:root{{--bg:{bg};--surface:{surface};--text:{text};--accent:{accent};--font:{font}}}</style>",
            "</head><body class=\"theme-{slug} layout-{layout}\" data-theme=\"{id}\">",
            "{frame}{scroll}</body></html>"
        ),
        lang = ctx.t.locale(),
        title = escape(title),
        name = escape(&profile.name),
        css = escape(&ctx.base.join(STYLESHEET_FILE)),
        bg = palette.background,
        surface = palette.surface,
        text = palette.text,
        accent = palette.accent,
        font = palette.font,
        slug = kind.slug(),
        layout = kind.layout().as_str(),
        id = ctx.theme.id,
        frame = frame(ctx, page, main),
        scroll = scroll_to_top(),
    )
}

fn frame(ctx: &PageContext<'_>, page: &ThemePage, main: &str) -> String {
    let brand = ThemeLink::new(ctx.base, "", &ctx.catalog.profile().name)
        .class("brand")
        .render();
    let nav = nav(ctx, page);
    let footer = footer(ctx);

    match ctx.theme.kind.layout() {
        Layout::Stacked | Layout::Grid => format!(
            "<header class=\"site-header\">{brand}{nav}</header><main>{main}</main>{footer}"
        ),
        Layout::Sidebar => format!(
            "<div class=\"frame\"><aside class=\"sidebar\">{brand}{nav}</aside><main>{main}{footer}</main></div>"
        ),
        Layout::Console => format!(
            "<div class=\"console\"><header class=\"prompt-bar\">{brand}{nav}</header><main class=\"output\">{main}</main>{footer}</div>"
        ),
        Layout::Split => format!(
            "<div class=\"split\"><header class=\"hero-col\">{brand}{nav}</header><main>{main}{footer}</main></div>"
        ),
    }
}

fn nav(ctx: &PageContext<'_>, page: &ThemePage) -> String {
    let active = page.nav_section();
    let links: String = NAV_PAGES
        .iter()
        .map(|target| {
            let link = ThemeLink::new(ctx.base, &target.path(), &ctx.t.t(target.title_key()))
                .class("nav-link")
                .current(active.as_ref() == Some(target));
            format!("<li>{}</li>", link.render())
        })
        .collect();

    format!(
        "<nav class=\"site-nav\"><ul>{links}</ul>{}</nav>",
        locale_switch(ctx, page)
    )
}

fn locale_switch(ctx: &PageContext<'_>, page: &ThemePage) -> String {
    if !ctx.locale_switch {
        return String::new();
    }

    // Unknown pages send the visitor back to the theme root.
    let next = match page {
        ThemePage::NotFound => ctx.base.root(),
        other => ctx.base.join(&other.path()),
    };
    let active = ctx.t.locale();
    let links: String = SUPPORTED_LOCALES
        .iter()
        .map(|locale| {
            let href = format!(
                "{}?next={}",
                ctx.base.site_join(&format!("locale/{}", locale.as_str())),
                next
            );
            format!(
                "<a href=\"{}\" hreflang=\"{lang}\" lang=\"{lang}\"{}>{}</a>",
                escape(&href),
                if *locale == active { " aria-current=\"true\"" } else { "" },
                escape(locale.native_name()),
                lang = locale.as_str(),
            )
        })
        .collect();

    format!(
        "<div class=\"locale-switch\" role=\"group\" aria-label=\"{}\">{links}</div>",
        escape(&ctx.t.t("common:locale.label"))
    )
}

fn footer(ctx: &PageContext<'_>) -> String {
    let year = chrono::Utc::now().year().to_string();
    let copy = ctx.t.t_with(
        "common:footer.copy",
        &[("year", year.as_str()), ("name", ctx.catalog.profile().name.as_str())],
    );
    format!(
        "<footer class=\"site-footer\"><p>{}</p><a href=\"{}\">{}</a></footer>",
        escape(&copy),
        escape(&ctx.base.site_root()),
        escape(&ctx.t.t("common:footer.all_themes"))
    )
}
