use std::sync::Arc;

use tracing::warn;

use crate::i18n::application::domain::{Locale, LocaleBundle};

/// Key lookup bound to one active locale, with a fallback bundle behind it.
///
/// A key missing from both bundles renders as the raw key (`t`) or as a
/// caller-supplied default (`t_or`). Interpolated values are inserted as
/// given; escaping is left to the HTML layer.
#[derive(Debug, Clone)]
pub struct Translator {
    active: Arc<LocaleBundle>,
    fallback: Arc<LocaleBundle>,
}

impl Translator {
    pub fn new(active: Arc<LocaleBundle>, fallback: Arc<LocaleBundle>) -> Self {
        Self { active, fallback }
    }

    pub fn locale(&self) -> Locale {
        self.active.locale()
    }

    /// Looks the key up in the active bundle, then the fallback bundle.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.active
            .get(key)
            .or_else(|| self.fallback.get(key))
    }

    pub fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(text) => text.to_string(),
            None => {
                warn!("Missing translation key {} for locale {}", key, self.locale());
                key.to_string()
            }
        }
    }

    pub fn t_or(&self, key: &str, default: &str) -> String {
        match self.lookup(key) {
            Some(text) => text.to_string(),
            None => {
                warn!("Missing translation key {} for locale {}", key, self.locale());
                default.to_string()
            }
        }
    }

    /// Like `t`, replacing `{{name}}` placeholders with the given values.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.t(key), args)
    }
}

fn interpolate(mut text: String, args: &[(&str, &str)]) -> String {
    for (name, value) in args {
        text = text
            .replace(&format!("{{{{{name}}}}}"), value)
            .replace(&format!("{{{{ {name} }}}}"), value);
    }
    text
}
