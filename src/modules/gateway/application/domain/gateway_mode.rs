use std::str::FromStr;

use crate::theme::application::domain::ThemeId;

/// How this process answers requests under `/v{n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatewayMode {
    /// Every enabled theme is rendered in this process.
    #[default]
    Bundled,
    /// Only one theme is served; `/` redirects to it.
    Standalone(ThemeId),
    /// Theme prefixes are forwarded to per-theme development servers.
    Proxy,
}

impl GatewayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bundled => "bundled",
            Self::Standalone(_) => "standalone",
            Self::Proxy => "proxy",
        }
    }

    pub fn standalone_theme(self) -> Option<ThemeId> {
        match self {
            Self::Standalone(id) => Some(id),
            _ => None,
        }
    }
}

impl FromStr for GatewayMode {
    type Err = String;

    /// Parses `bundled` or `proxy`. Standalone mode is chosen per theme on
    /// the command line, not by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bundled" => Ok(Self::Bundled),
            "proxy" => Ok(Self::Proxy),
            other => Err(format!("unknown gateway mode: {other}")),
        }
    }
}
