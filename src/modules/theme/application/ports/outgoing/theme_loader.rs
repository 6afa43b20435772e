use async_trait::async_trait;

use crate::theme::application::domain::{LoadedTheme, ThemeId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeLoadError {
    #[error("Theme {0} is not enabled")]
    NotRegistered(ThemeId),

    #[error("Theme {id} asset missing: {path}")]
    AssetMissing { id: ThemeId, path: String },

    #[error("Theme {id} could not be read from {path}: {message}")]
    Io {
        id: ThemeId,
        path: String,
        message: String,
    },
}

/// Fetches the assets of a single theme.
#[async_trait]
pub trait ThemeLoader {
    async fn load(&self, id: ThemeId) -> Result<LoadedTheme, ThemeLoadError>;
}
