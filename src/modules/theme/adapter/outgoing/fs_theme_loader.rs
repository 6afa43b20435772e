use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::theme::application::{
    domain::{LoadedTheme, ThemeId, STYLESHEET_FILE},
    ports::outgoing::{ThemeLoadError, ThemeLoader},
};

/// Loads theme assets from `{root}/v{n}/`.
#[derive(Debug, Clone)]
pub struct FsThemeLoader {
    root: PathBuf,
}

impl FsThemeLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ThemeLoader for FsThemeLoader {
    async fn load(&self, id: ThemeId) -> Result<LoadedTheme, ThemeLoadError> {
        let path = self.root.join(id.segment()).join(STYLESHEET_FILE);
        debug!("Reading theme {} from {}", id, path.display());

        let stylesheet = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ThemeLoadError::AssetMissing {
                    id,
                    path: path.display().to_string(),
                }
            } else {
                ThemeLoadError::Io {
                    id,
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        Ok(LoadedTheme::new(id, stylesheet))
    }
}
