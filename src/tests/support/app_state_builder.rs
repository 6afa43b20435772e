use std::sync::Arc;

use actix_web::web;

use crate::config::AppConfig;
use crate::gateway::application::{
    domain::{GatewayMode, ProxyTable, DEFAULT_BASE_PORT},
    gateway_state::GatewayState,
    ports::outgoing::UpstreamForwarder,
};
use crate::i18n::{
    adapter::outgoing::JsonBundleSource,
    application::{
        domain::Locale,
        i18n_state::I18nState,
        ports::outgoing::BundleSource,
        services::{FirstVisitPolicy, LocaleResolver, TranslationService},
    },
};
use crate::portfolio::{
    adapter::outgoing::StaticPortfolioSource,
    application::{
        domain::PortfolioCatalog, portfolio_use_cases::PortfolioUseCases,
        ports::outgoing::PortfolioSource,
    },
};
use crate::tests::support::stubs::{StubForwarder, StubThemeLoader};
use crate::theme::application::{
    domain::ThemeId, ports::outgoing::ThemeLoader, services::ThemeRegistry,
};
use crate::AppState;

/// Builds an `AppState` over the built-in catalog and the shipped locale
/// files, with stubbed theme assets and upstreams.
pub struct TestAppStateBuilder {
    config: AppConfig,
    catalog: Arc<PortfolioCatalog>,
    bundle_source: Arc<dyn BundleSource + Send + Sync>,
    theme_loader: Arc<dyn ThemeLoader + Send + Sync>,
    enabled_themes: Vec<ThemeId>,
    gateway_mode: GatewayMode,
    forwarder: Arc<dyn UpstreamForwarder + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let catalog = StaticPortfolioSource
            .load()
            .expect("built-in catalog must validate");
        Self {
            config: AppConfig::default(),
            catalog: Arc::new(catalog),
            bundle_source: Arc::new(JsonBundleSource::new(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/locales"
            ))),
            theme_loader: Arc::new(StubThemeLoader::new()),
            enabled_themes: ThemeId::all().collect(),
            gateway_mode: GatewayMode::Bundled,
            forwarder: Arc::new(StubForwarder::unreachable()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_bundle_source(mut self, source: impl BundleSource + Send + Sync + 'static) -> Self {
        self.bundle_source = Arc::new(source);
        self
    }

    pub fn with_theme_loader(mut self, loader: Arc<dyn ThemeLoader + Send + Sync>) -> Self {
        self.theme_loader = loader;
        self
    }

    /// Ids outside `1..=15` are ignored.
    pub fn with_enabled_themes(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.enabled_themes = ids.into_iter().filter_map(|n| ThemeId::new(n).ok()).collect();
        self
    }

    pub fn with_gateway_mode(mut self, mode: GatewayMode) -> Self {
        self.gateway_mode = mode;
        self
    }

    pub fn with_forwarder(mut self, forwarder: Arc<dyn UpstreamForwarder + Send + Sync>) -> Self {
        self.forwarder = forwarder;
        self
    }

    pub fn with_public_base_path(mut self, path: &str) -> Self {
        self.config.public_base_path = path.to_string();
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let table = ProxyTable::generate("127.0.0.1", DEFAULT_BASE_PORT, ThemeId::all())
            .expect("default ports fit in u16");

        web::Data::new(AppState {
            config: self.config,
            catalog: Arc::clone(&self.catalog),
            portfolio: PortfolioUseCases::from_catalog(self.catalog),
            i18n: I18nState {
                resolver: Arc::new(LocaleResolver::new(Locale::It, FirstVisitPolicy::Browser)),
                translations: Arc::new(TranslationService::new(self.bundle_source, Locale::It)),
                query_param: "lang".to_string(),
                cookie_name: "locale".to_string(),
            },
            themes: Arc::new(ThemeRegistry::new(self.theme_loader, self.enabled_themes)),
            gateway: GatewayState {
                mode: self.gateway_mode,
                table: Arc::new(table),
                forwarder: self.forwarder,
            },
        })
    }
}
