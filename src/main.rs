pub mod api;
pub mod cli;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::export;
pub use modules::gateway;
pub use modules::i18n;
pub use modules::portfolio;
pub use modules::theme;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{apply_serve_overrides, format_routes, Cli, Command};
use crate::config::AppConfig;
use crate::export::{
    adapter::outgoing::FsSiteWriter,
    application::services::{ExportOptions, StaticSiteExporter},
};
use crate::gateway::{
    adapter::outgoing::ReqwestForwarder,
    application::{
        domain::{GatewayMode, ProxyTable},
        gateway_state::GatewayState,
    },
};
use crate::i18n::{
    adapter::outgoing::JsonBundleSource,
    application::{
        domain::Locale,
        i18n_state::I18nState,
        services::{LocaleResolver, TranslationService},
    },
};
use crate::portfolio::{
    adapter::outgoing::StaticPortfolioSource,
    application::{
        domain::PortfolioCatalog, portfolio_use_cases::PortfolioUseCases,
        ports::outgoing::PortfolioSource,
    },
};
use crate::shared::api::custom_query_config;
use crate::theme::{
    adapter::outgoing::FsThemeLoader,
    application::{domain::ThemeId, services::ThemeRegistry},
};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<PortfolioCatalog>,
    pub portfolio: PortfolioUseCases,
    pub i18n: I18nState,
    pub themes: Arc<ThemeRegistry>,
    pub gateway: GatewayState,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    AppConfig::load_env_files();
    let mut config = AppConfig::from_env()?;

    let command = cli.command.unwrap_or(Command::Serve {
        theme: None,
        host: None,
        port: None,
        mode: None,
    });

    match command {
        Command::Serve {
            theme,
            host,
            port,
            mode,
        } => {
            apply_serve_overrides(&mut config, theme, host, port, mode);
            serve(config).await
        }
        Command::Export {
            out,
            themes,
            locale,
            base_path,
        } => {
            let state = build_state(config.clone())?;
            let exporter = StaticSiteExporter::new(
                Arc::clone(&state.catalog),
                Arc::clone(&state.themes),
                Arc::clone(&state.i18n.translations),
                Arc::new(FsSiteWriter::new(&out)),
            );
            let report = exporter
                .export(&ExportOptions {
                    themes,
                    locale: locale.unwrap_or(config.default_locale),
                    public_base_path: base_path.unwrap_or(config.public_base_path),
                })
                .await?;
            info!(
                "Exported {} themes ({} files) to {}",
                report.themes.len(),
                report.files,
                out.display()
            );
            Ok(())
        }
        Command::Routes {
            host,
            base_port,
            json,
        } => {
            let table = ProxyTable::generate(
                host.as_deref().unwrap_or(&config.upstream_host),
                base_port.unwrap_or(config.base_port),
                ThemeId::all(),
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(table.routes())?);
            } else {
                print!("{}", format_routes(&table));
            }
            Ok(())
        }
    }
}

#[cfg(not(tarpaulin_include))]
async fn serve(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting application...");

    let server_url = config.server_url();
    let state = build_state(config)?;

    // Warm the default bundle so the first page is not rendered with raw keys.
    let default_locale = state.i18n.resolver.default_locale();
    if let Err(e) = state.i18n.translations.bundle(default_locale).await {
        error!("Translations for {} failed to load: {}", default_locale, e);
    }

    info!(
        "Server run on: {} ({} mode)",
        server_url,
        state.gateway.mode.as_str()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_query_config())
            .configure(init_routes)
            .default_service(web::to(
                crate::gateway::adapter::incoming::web::routes::gateway_dispatch_handler,
            ))
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

/// Wires the process state. The catalog is validated here so invalid
/// content aborts startup instead of surfacing on a page.
pub fn build_state(config: AppConfig) -> anyhow::Result<AppState> {
    let catalog = Arc::new(
        StaticPortfolioSource
            .load()
            .context("portfolio content is invalid")?,
    );

    let translations = TranslationService::new(
        Arc::new(JsonBundleSource::new(config.locales_dir.clone())),
        Locale::It,
    );
    let i18n = I18nState {
        resolver: Arc::new(LocaleResolver::new(config.default_locale, config.first_visit)),
        translations: Arc::new(translations),
        query_param: config.locale_query_param.clone(),
        cookie_name: config.locale_cookie.clone(),
    };

    let loader = Arc::new(FsThemeLoader::new(config.themes_dir.clone()));
    let themes = match config.gateway_mode {
        GatewayMode::Standalone(id) => ThemeRegistry::new(loader, [id]),
        _ => ThemeRegistry::with_all(loader),
    };

    let table = ProxyTable::generate(&config.upstream_host, config.base_port, ThemeId::all())?;
    let gateway = GatewayState {
        mode: config.gateway_mode,
        table: Arc::new(table),
        forwarder: Arc::new(ReqwestForwarder::new(config.upstream_timeout)?),
    };

    Ok(AppState {
        portfolio: PortfolioUseCases::from_catalog(Arc::clone(&catalog)),
        catalog,
        i18n,
        themes: Arc::new(themes),
        gateway,
        config,
    })
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // API docs
    cfg.service(crate::api::openapi::openapi_json);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_timeline_handler);
    // Translations
    cfg.service(crate::i18n::adapter::incoming::web::routes::get_bundle_handler);
    cfg.service(crate::i18n::adapter::incoming::web::routes::switch_locale_handler);
    // Themes and gateway
    cfg.service(crate::theme::adapter::incoming::web::routes::get_themes_handler);
    cfg.service(crate::gateway::adapter::incoming::web::routes::get_routes_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
