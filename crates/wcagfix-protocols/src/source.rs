//! Document acquisition protocol.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AcquireError;

/// Raw markup produced by a [`DocumentSource`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquiredDocument {
    /// Where the markup came from (final URL or path).
    pub location: String,

    /// The markup itself.
    pub html: String,
}

impl AcquiredDocument {
    pub fn new(location: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            html: html.into(),
        }
    }
}

/// Produces the HTML for one run, from the network or from disk.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable description of the source, e.g. the URL.
    fn describe(&self) -> String;

    /// Fetch the document.
    async fn acquire(&self) -> Result<AcquiredDocument, AcquireError>;
}
