use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::export::application::ports::outgoing::{SiteWriteError, SiteWriter};

/// Writes the exported site below a local directory.
#[derive(Debug, Clone)]
pub struct FsSiteWriter {
    root: PathBuf,
}

impl FsSiteWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, SiteWriteError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes || relative.as_os_str().is_empty() {
            return Err(SiteWriteError {
                path: path.to_string(),
                message: "path must stay inside the output directory".to_string(),
            });
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl SiteWriter for FsSiteWriter {
    async fn write(&self, path: &str, contents: &[u8]) -> Result<(), SiteWriteError> {
        let target = self.resolve(path)?;
        let io_error = |e: std::io::Error| SiteWriteError {
            path: target.display().to_string(),
            message: e.to_string(),
        };

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        tokio::fs::write(&target, contents).await.map_err(io_error)?;
        debug!("Wrote {}", target.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsSiteWriter::new(dir.path());

        writer.write("v3/skills/index.html", b"<p>ok</p>").await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("v3/skills/index.html")).unwrap();
        assert_eq!(written, "<p>ok</p>");
    }

    #[tokio::test]
    async fn refuses_paths_outside_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsSiteWriter::new(dir.path());

        assert!(writer.write("../escape.html", b"x").await.is_err());
        assert!(writer.write("", b"x").await.is_err());
    }
}
