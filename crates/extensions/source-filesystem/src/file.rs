//! Reads the document from disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use wcagfix_protocols::error::AcquireError;
use wcagfix_protocols::source::{AcquiredDocument, DocumentSource};

/// Document source backed by a local HTML file.
///
/// Relative paths resolve against the working directory. The file must be
/// valid UTF-8.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn acquire(&self) -> Result<AcquiredDocument, AcquireError> {
        info!(path = %self.path.display(), "Reading document");

        let html = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => AcquireError::NotFound(self.path.display().to_string()),
                _ => AcquireError::Io(e),
            })?;

        debug!(path = %self.path.display(), bytes = html.len(), "Read document");
        Ok(AcquiredDocument::new(self.describe(), html))
    }
}
