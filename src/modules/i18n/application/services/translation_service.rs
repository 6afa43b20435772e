use std::sync::Arc;

use tracing::{info, warn};

use crate::i18n::application::{
    domain::{Locale, LocaleBundle},
    ports::outgoing::{BundleLoadError, BundleSource},
    services::Translator,
};
use crate::shared::cache::{LazyCache, LoadState};

/// Owns the per-locale bundles. Each bundle is loaded on first use, shared
/// by concurrent first requests and kept for the process lifetime.
pub struct TranslationService {
    source: Arc<dyn BundleSource + Send + Sync>,
    fallback_locale: Locale,
    bundles: LazyCache<Locale, Arc<LocaleBundle>>,
}

impl TranslationService {
    pub fn new(source: Arc<dyn BundleSource + Send + Sync>, fallback_locale: Locale) -> Self {
        Self {
            source,
            fallback_locale,
            bundles: LazyCache::new(),
        }
    }

    pub fn fallback_locale(&self) -> Locale {
        self.fallback_locale
    }

    pub async fn bundle(&self, locale: Locale) -> Result<Arc<LocaleBundle>, BundleLoadError> {
        let source = Arc::clone(&self.source);
        self.bundles
            .get_or_try_load(locale, || async move {
                let bundle = source.load(locale).await?;
                info!("Loaded {} translations for {}", bundle.len(), locale);
                Ok(Arc::new(bundle))
            })
            .await
    }

    /// A translator for `locale`. Never fails: an unavailable bundle
    /// degrades to the fallback bundle, and then to raw keys.
    pub async fn translator(&self, locale: Locale) -> Translator {
        let fallback = match self.bundle(self.fallback_locale).await {
            Ok(bundle) => bundle,
            Err(err) => {
                warn!("Fallback translations unavailable: {}", err);
                Arc::new(LocaleBundle::empty(self.fallback_locale))
            }
        };

        if locale == self.fallback_locale {
            return Translator::new(Arc::clone(&fallback), fallback);
        }

        let active = match self.bundle(locale).await {
            Ok(bundle) => bundle,
            Err(err) => {
                warn!(
                    "Translations for {} unavailable, using {}: {}",
                    locale, self.fallback_locale, err
                );
                Arc::clone(&fallback)
            }
        };

        Translator::new(active, fallback)
    }

    pub fn state(&self, locale: Locale) -> LoadState {
        self.bundles.state(&locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};
    use serde_json::json;

    mock! {
        pub BundleSourceMock {}
        #[async_trait]
        impl BundleSource for BundleSourceMock {
            async fn load(&self, locale: Locale) -> Result<LocaleBundle, BundleLoadError>;
        }
    }

    fn bundle(locale: Locale, home: &str) -> LocaleBundle {
        LocaleBundle::from_namespaces(locale, vec![("common", json!({ "nav": { "home": home } }))])
            .unwrap()
    }

    #[tokio::test]
    async fn loads_each_locale_once() {
        let mut source = MockBundleSourceMock::new();
        source
            .expect_load()
            .with(eq(Locale::It))
            .times(1)
            .returning(|l| Ok(bundle(l, "Inizio")));
        source
            .expect_load()
            .with(eq(Locale::En))
            .times(1)
            .returning(|l| Ok(bundle(l, "Home")));

        let service = TranslationService::new(Arc::new(source), Locale::It);

        for _ in 0..3 {
            assert_eq!(service.translator(Locale::En).await.t("nav.home"), "Home");
            assert_eq!(service.translator(Locale::It).await.t("nav.home"), "Inizio");
        }
        assert_eq!(service.state(Locale::En), LoadState::Loaded);
    }

    #[tokio::test]
    async fn unavailable_locale_degrades_to_fallback() {
        let mut source = MockBundleSourceMock::new();
        source
            .expect_load()
            .with(eq(Locale::It))
            .returning(|l| Ok(bundle(l, "Inizio")));
        source.expect_load().with(eq(Locale::En)).returning(|l| {
            Err(BundleLoadError::NotFound {
                locale: l,
                namespace: "common".into(),
            })
        });

        let service = TranslationService::new(Arc::new(source), Locale::It);
        let translator = service.translator(Locale::En).await;

        assert_eq!(translator.t("nav.home"), "Inizio");
        assert_eq!(service.state(Locale::En), LoadState::NotLoaded);
    }

    #[tokio::test]
    async fn no_bundles_at_all_renders_raw_keys() {
        let mut source = MockBundleSourceMock::new();
        source.expect_load().returning(|l| {
            Err(BundleLoadError::Io {
                path: format!("locales/{l}"),
                message: "denied".into(),
            })
        });

        let service = TranslationService::new(Arc::new(source), Locale::It);

        assert_eq!(service.translator(Locale::En).await.t("nav.home"), "nav.home");
    }
}
