use std::sync::Arc;

use tracing::info;

use crate::{
    export::application::ports::outgoing::{SiteWriteError, SiteWriter},
    gateway::ui::render_landing,
    i18n::application::{domain::Locale, services::TranslationService},
    portfolio::application::domain::PortfolioCatalog,
    shared::ui::ThemeBasePath,
    theme::{
        application::{
            domain::{ThemeId, ThemePage, NAV_PAGES, STYLESHEET_FILE},
            ports::outgoing::ThemeLoadError,
            services::ThemeRegistry,
        },
        ui::{render_page, PageContext},
    },
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Theme(#[from] ThemeLoadError),

    #[error(transparent)]
    Write(#[from] SiteWriteError),
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Themes to export. Empty means every enabled theme.
    pub themes: Vec<ThemeId>,
    pub locale: Locale,
    pub public_base_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub themes: Vec<ThemeId>,
    pub files: usize,
}

/// Renders every page of the selected themes into a deployable static site:
/// `v{n}/index.html`, `v{n}/{page}/index.html`,
/// `v{n}/portfolio/{slug}/index.html`, `v{n}/404.html`, `v{n}/theme.css`
/// and a landing `index.html`.
pub struct StaticSiteExporter {
    catalog: Arc<PortfolioCatalog>,
    themes: Arc<ThemeRegistry>,
    translations: Arc<TranslationService>,
    writer: Arc<dyn SiteWriter + Send + Sync>,
}

impl StaticSiteExporter {
    pub fn new(
        catalog: Arc<PortfolioCatalog>,
        themes: Arc<ThemeRegistry>,
        translations: Arc<TranslationService>,
        writer: Arc<dyn SiteWriter + Send + Sync>,
    ) -> Self {
        Self {
            catalog,
            themes,
            translations,
            writer,
        }
    }

    pub async fn export(&self, options: &ExportOptions) -> Result<ExportReport, ExportError> {
        let selected: Vec<ThemeId> = if options.themes.is_empty() {
            self.themes.enabled().collect()
        } else {
            options.themes.clone()
        };

        let translator = self.translations.translator(options.locale).await;
        let mut files = 0;

        for id in &selected {
            let theme = self.themes.load(*id).await?;
            let base = ThemeBasePath::new(&options.public_base_path, &id.prefix());
            let segment = id.segment();

            self.writer
                .write(&format!("{segment}/{STYLESHEET_FILE}"), theme.stylesheet.as_bytes())
                .await?;
            files += 1;

            let projects = self
                .catalog
                .projects()
                .iter()
                .map(|p| ThemePage::Project(p.slug.clone()));
            let pages = NAV_PAGES.iter().cloned().chain(projects).chain([ThemePage::NotFound]);

            for page in pages {
                let rendered = render_page(
                    &PageContext {
                        theme: &theme,
                        catalog: &self.catalog,
                        t: &translator,
                        base: &base,
                        locale_switch: false,
                    },
                    &page,
                );
                self.writer
                    .write(&output_path(&segment, &page), rendered.html.as_bytes())
                    .await?;
                files += 1;
            }
            info!("Exported theme {}", id);
        }

        let site = ThemeBasePath::new(&options.public_base_path, "");
        let landing = render_landing(&translator, &site, &selected, false, false);
        self.writer.write("index.html", landing.as_bytes()).await?;
        files += 1;

        Ok(ExportReport {
            themes: selected,
            files,
        })
    }
}

fn output_path(segment: &str, page: &ThemePage) -> String {
    match page {
        ThemePage::NotFound => format!("{segment}/404.html"),
        ThemePage::Home => format!("{segment}/index.html"),
        other => format!("{segment}{}/index.html", other.path()),
    }
}
