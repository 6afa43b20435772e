use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::{
    gateway::application::domain::{GatewayMode, DEFAULT_BASE_PORT},
    i18n::application::{domain::Locale, services::FirstVisitPolicy},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration, read from the environment with defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_env: String,
    pub default_locale: Locale,
    pub first_visit: FirstVisitPolicy,
    pub locale_query_param: String,
    pub locale_cookie: String,
    pub locales_dir: PathBuf,
    pub themes_dir: PathBuf,
    pub gateway_mode: GatewayMode,
    pub upstream_host: String,
    pub base_port: u16,
    pub upstream_timeout: Duration,
    /// Prefix the site is published under, e.g. `/portfolio`. Empty for root.
    pub public_base_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_BASE_PORT,
            rust_env: "development".to_string(),
            default_locale: Locale::It,
            first_visit: FirstVisitPolicy::Browser,
            locale_query_param: "lang".to_string(),
            locale_cookie: "locale".to_string(),
            locales_dir: PathBuf::from("locales"),
            themes_dir: PathBuf::from("themes"),
            gateway_mode: GatewayMode::Bundled,
            upstream_host: "127.0.0.1".to_string(),
            base_port: DEFAULT_BASE_PORT,
            upstream_timeout: Duration::from_secs(30),
            public_base_path: String::new(),
        }
    }
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` if present, otherwise `.env`.
    pub fn load_env_files() {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let default_locale = parse_var(&lookup, "DEFAULT_LOCALE", defaults.default_locale)?;
        let first_visit = parse_var(&lookup, "LOCALE_FIRST_VISIT", defaults.first_visit)?;
        let gateway_mode = parse_var(&lookup, "GATEWAY_MODE", defaults.gateway_mode)?;
        let port = parse_var(&lookup, "PORT", defaults.port)?;
        let base_port = parse_var(&lookup, "GATEWAY_BASE_PORT", defaults.base_port)?;
        let timeout_secs = parse_var(
            &lookup,
            "GATEWAY_TIMEOUT_SECS",
            defaults.upstream_timeout.as_secs(),
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "GATEWAY_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }

        let public_base_path = text("PUBLIC_BASE_PATH", defaults.public_base_path);
        if public_base_path.contains("//") || public_base_path.contains(['?', '#']) {
            return Err(ConfigError::Invalid {
                key: "PUBLIC_BASE_PATH",
                value: public_base_path,
                reason: "must be a plain path prefix".to_string(),
            });
        }

        Ok(Self {
            host: text("HOST", defaults.host),
            port,
            rust_env: text("RUST_ENV", defaults.rust_env),
            default_locale,
            first_visit,
            locale_query_param: text("LOCALE_QUERY_PARAM", defaults.locale_query_param),
            locale_cookie: text("LOCALE_COOKIE", defaults.locale_cookie),
            locales_dir: PathBuf::from(text(
                "LOCALES_DIR",
                defaults.locales_dir.display().to_string(),
            )),
            themes_dir: PathBuf::from(text(
                "THEMES_DIR",
                defaults.themes_dir.display().to_string(),
            )),
            gateway_mode,
            upstream_host: text("GATEWAY_UPSTREAM_HOST", defaults.upstream_host),
            base_port,
            upstream_timeout: Duration::from_secs(timeout_secs),
            public_base_path,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).map(|v| v.trim().to_string()) {
        None => Ok(default),
        Some(value) if value.is_empty() => Ok(default),
        Some(value) => value.parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:3000");
        assert_eq!(config.default_locale, Locale::It);
        assert_eq!(config.first_visit, FirstVisitPolicy::Browser);
        assert_eq!(config.locale_query_param, "lang");
        assert_eq!(config.locale_cookie, "locale");
        assert_eq!(config.gateway_mode, GatewayMode::Bundled);
        assert_eq!(config.base_port, 3000);
        assert_eq!(config.public_base_path, "");
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("PORT", "8080"),
            ("DEFAULT_LOCALE", "en"),
            ("LOCALE_FIRST_VISIT", "default"),
            ("GATEWAY_MODE", "proxy"),
            ("GATEWAY_BASE_PORT", "4000"),
            ("PUBLIC_BASE_PATH", "/portfolio"),
            ("LOCALES_DIR", " /srv/locales "),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.first_visit, FirstVisitPolicy::Default);
        assert_eq!(config.gateway_mode, GatewayMode::Proxy);
        assert_eq!(config.base_port, 4000);
        assert_eq!(config.public_base_path, "/portfolio");
        assert_eq!(config.locales_dir, PathBuf::from("/srv/locales"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config(&[("HOST", "  "), ("PORT", "")]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = config(&[("DEFAULT_LOCALE", "fr")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DEFAULT_LOCALE", .. }));

        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));

        let err = config(&[("GATEWAY_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "GATEWAY_TIMEOUT_SECS", .. }));

        let err = config(&[("PUBLIC_BASE_PATH", "//evil.example")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PUBLIC_BASE_PATH", .. }));
    }
}
