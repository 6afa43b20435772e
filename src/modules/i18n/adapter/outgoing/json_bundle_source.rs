use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::i18n::application::{
    domain::{Locale, LocaleBundle, NAMESPACES},
    ports::outgoing::{BundleLoadError, BundleSource},
};

/// Reads `{root}/{locale}/{namespace}.json` for every namespace.
#[derive(Debug, Clone)]
pub struct JsonBundleSource {
    root: PathBuf,
}

impl JsonBundleSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn namespace_path(&self, locale: Locale, namespace: &str) -> PathBuf {
        self.root
            .join(locale.as_str())
            .join(format!("{namespace}.json"))
    }
}

async fn read_namespace(
    path: &Path,
    locale: Locale,
    namespace: &str,
) -> Result<serde_json::Value, BundleLoadError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            BundleLoadError::NotFound {
                locale,
                namespace: namespace.to_string(),
            }
        } else {
            BundleLoadError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        }
    })?;

    serde_json::from_str(&raw).map_err(|e| BundleLoadError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl BundleSource for JsonBundleSource {
    async fn load(&self, locale: Locale) -> Result<LocaleBundle, BundleLoadError> {
        let mut documents = Vec::with_capacity(NAMESPACES.len());
        for namespace in NAMESPACES {
            let path = self.namespace_path(locale, namespace);
            debug!("Reading translations from {}", path.display());
            documents.push((*namespace, read_namespace(&path, locale, namespace).await?));
        }

        Ok(LocaleBundle::from_namespaces(locale, documents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_locale(root: &Path, locale: &str, files: &[(&str, &str)]) {
        let dir = root.join(locale);
        fs::create_dir_all(&dir).unwrap();
        for (namespace, body) in files {
            fs::write(dir.join(format!("{namespace}.json")), body).unwrap();
        }
    }

    fn full_set<'a>(common: &'a str) -> Vec<(&'a str, &'a str)> {
        vec![
            ("common", common),
            ("profile", "{}"),
            ("projects", "{}"),
            ("experience", "{}"),
        ]
    }

    #[tokio::test]
    async fn loads_every_namespace_of_a_locale() {
        let dir = tempfile::tempdir().unwrap();
        write_locale(dir.path(), "en", &full_set(r#"{"nav":{"home":"Home"}}"#));

        let bundle = JsonBundleSource::new(dir.path())
            .load(Locale::En)
            .await
            .unwrap();

        assert_eq!(bundle.locale(), Locale::En);
        assert_eq!(bundle.get("common:nav.home"), Some("Home"));
    }

    #[tokio::test]
    async fn missing_namespace_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        write_locale(dir.path(), "it", &[("common", "{}")]);

        let err = JsonBundleSource::new(dir.path())
            .load(Locale::It)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BundleLoadError::NotFound {
                locale: Locale::It,
                namespace: "profile".into()
            }
        );
    }

    #[tokio::test]
    async fn malformed_json_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        write_locale(dir.path(), "en", &full_set("{ not json"));

        let err = JsonBundleSource::new(dir.path())
            .load(Locale::En)
            .await
            .unwrap_err();

        match err {
            BundleLoadError::Parse { path, .. } => assert!(path.ends_with("common.json")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn shipped_bundles_load() {
        let source = JsonBundleSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/locales"));
        for locale in crate::i18n::application::domain::SUPPORTED_LOCALES {
            let bundle = source.load(*locale).await.unwrap();
            assert!(!bundle.is_empty(), "{locale} bundle is empty");
        }
    }
}
