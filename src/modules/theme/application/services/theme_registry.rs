use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::shared::cache::{LazyCache, LoadState};
use crate::theme::application::{
    domain::{Layout, LoadedTheme, ThemeId, ThemeKind},
    ports::outgoing::{ThemeLoadError, ThemeLoader},
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ThemeSummary {
    #[schema(value_type = u8)]
    pub id: ThemeId,
    pub name: &'static str,
    pub slug: &'static str,
    pub prefix: String,
    pub layout: Layout,
    pub state: LoadState,
}

/// The enabled themes and their deferred loads.
///
/// Nothing is loaded up front. The first request under a theme's prefix
/// triggers its load; concurrent first requests share it and later ones
/// reuse the cached theme.
pub struct ThemeRegistry {
    loader: Arc<dyn ThemeLoader + Send + Sync>,
    enabled: BTreeSet<ThemeId>,
    themes: LazyCache<ThemeId, Arc<LoadedTheme>>,
}

impl ThemeRegistry {
    pub fn new(
        loader: Arc<dyn ThemeLoader + Send + Sync>,
        enabled: impl IntoIterator<Item = ThemeId>,
    ) -> Self {
        Self {
            loader,
            enabled: enabled.into_iter().collect(),
            themes: LazyCache::new(),
        }
    }

    /// Registry with every theme enabled.
    pub fn with_all(loader: Arc<dyn ThemeLoader + Send + Sync>) -> Self {
        Self::new(loader, ThemeId::all())
    }

    pub fn is_enabled(&self, id: ThemeId) -> bool {
        self.enabled.contains(&id)
    }

    pub fn enabled(&self) -> impl Iterator<Item = ThemeId> + '_ {
        self.enabled.iter().copied()
    }

    pub async fn load(&self, id: ThemeId) -> Result<Arc<LoadedTheme>, ThemeLoadError> {
        if !self.is_enabled(id) {
            return Err(ThemeLoadError::NotRegistered(id));
        }

        let loader = Arc::clone(&self.loader);
        let result = self
            .themes
            .get_or_try_load(id, || async move {
                let theme = loader.load(id).await?;
                info!("Loaded theme {} ({})", id, theme.kind.name());
                Ok(Arc::new(theme))
            })
            .await;

        if let Err(err) = &result {
            warn!("Theme {} failed to load: {}", id, err);
        }
        result
    }

    pub fn state(&self, id: ThemeId) -> LoadState {
        self.themes.state(&id)
    }

    pub fn summaries(&self) -> Vec<ThemeSummary> {
        self.enabled()
            .map(|id| {
                let kind = ThemeKind::for_id(id);
                ThemeSummary {
                    id,
                    name: kind.name(),
                    slug: kind.slug(),
                    prefix: id.prefix(),
                    layout: kind.layout(),
                    state: self.state(id),
                }
            })
            .collect()
    }
}
