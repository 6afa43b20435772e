use async_trait::async_trait;

use crate::i18n::application::domain::{BundleError, Locale, LocaleBundle};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BundleLoadError {
    #[error("No {namespace} translations for {locale}")]
    NotFound { locale: Locale, namespace: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed JSON in {path}: {message}")]
    Parse { path: String, message: String },

    #[error(transparent)]
    InvalidBundle(#[from] BundleError),
}

/// Loads the translation bundle of one locale.
#[async_trait]
pub trait BundleSource: Send + Sync {
    async fn load(&self, locale: Locale) -> Result<LocaleBundle, BundleLoadError>;
}
