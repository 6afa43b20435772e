use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::i18n::application::domain::{Locale, TranslationKey};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BundleError {
    #[error("Namespace {namespace} must be a JSON object")]
    NotAnObject { namespace: String },

    #[error("Unsupported value at {key}: only strings and nested objects are allowed")]
    UnsupportedValue { key: String },
}

/// All translations of one locale, flattened to `namespace:dotted.path`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleBundle {
    locale: Locale,
    entries: HashMap<String, String>,
}

impl LocaleBundle {
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            entries: HashMap::new(),
        }
    }

    /// Builds a bundle from one JSON document per namespace. Nested objects
    /// are flattened into dotted paths.
    pub fn from_namespaces<I, S>(locale: Locale, namespaces: I) -> Result<Self, BundleError>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for (namespace, document) in namespaces {
            let namespace = namespace.as_ref();
            let Value::Object(map) = document else {
                return Err(BundleError::NotAnObject {
                    namespace: namespace.to_string(),
                });
            };
            for (key, value) in map {
                flatten(namespace, key, value, &mut entries)?;
            }
        }
        Ok(Self { locale, entries })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&TranslationKey::parse(key).qualified())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key.
    pub fn to_sorted_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

fn flatten(
    namespace: &str,
    path: String,
    value: Value,
    out: &mut HashMap<String, String>,
) -> Result<(), BundleError> {
    match value {
        Value::String(text) => {
            out.insert(format!("{namespace}:{path}"), text);
            Ok(())
        }
        Value::Object(map) => {
            for (key, nested) in map {
                flatten(namespace, format!("{path}.{key}"), nested, out)?;
            }
            Ok(())
        }
        _ => Err(BundleError::UnsupportedValue {
            key: format!("{namespace}:{path}"),
        }),
    }
}
