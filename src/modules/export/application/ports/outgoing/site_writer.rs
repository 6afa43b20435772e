use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Failed to write {path}: {message}")]
pub struct SiteWriteError {
    pub path: String,
    pub message: String,
}

/// Destination of an exported static site.
#[async_trait]
pub trait SiteWriter {
    /// Writes `contents` at `path`, relative to the site root, creating
    /// parent directories as needed.
    async fn write(&self, path: &str, contents: &[u8]) -> Result<(), SiteWriteError>;
}
