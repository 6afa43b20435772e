use serde::Serialize;
use utoipa::ToSchema;

use crate::theme::application::domain::ThemeId;

/// Theme `n`'s development server listens on `DEFAULT_BASE_PORT + n`.
pub const DEFAULT_BASE_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProxyRoute {
    #[schema(value_type = u8)]
    pub theme: ThemeId,
    /// Path prefix owned by the theme, e.g. `/v3`
    pub prefix: String,
    pub port: u16,
    /// Upstream origin, e.g. `http://127.0.0.1:3003`
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProxyTableError {
    #[error("Port for theme {theme} overflows base port {base_port}")]
    PortOverflow { theme: ThemeId, base_port: u16 },
}

/// Static prefix → upstream table, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProxyTable {
    routes: Vec<ProxyRoute>,
}

impl ProxyTable {
    pub fn generate(
        host: &str,
        base_port: u16,
        ids: impl IntoIterator<Item = ThemeId>,
    ) -> Result<Self, ProxyTableError> {
        let mut routes = ids
            .into_iter()
            .map(|theme| {
                let port = base_port
                    .checked_add(u16::from(theme.get()))
                    .ok_or(ProxyTableError::PortOverflow { theme, base_port })?;
                Ok(ProxyRoute {
                    theme,
                    prefix: theme.prefix(),
                    port,
                    target: format!("http://{host}:{port}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        routes.sort_by_key(|route| route.theme);
        routes.dedup_by_key(|route| route.theme);
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[ProxyRoute] {
        &self.routes
    }

    pub fn route_for(&self, theme: ThemeId) -> Option<&ProxyRoute> {
        self.routes.iter().find(|route| route.theme == theme)
    }
}
