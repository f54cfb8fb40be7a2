//! Pipeline errors.

use std::io;

use thiserror::Error;
use wcagfix_protocols::error::{AcquireError, ExtensionError, RuleError};

/// Any failure that aborts a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to acquire document: {0}")]
    Acquisition(#[from] AcquireError),

    #[error("Rule '{rule}' failed: {source}")]
    Rule { rule: String, source: RuleError },

    #[error(transparent)]
    Extension(#[from] ExtensionError),

    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] io::Error),

    #[error("Failed to write {path}: {source}")]
    Persist { path: String, source: io::Error },
}

impl PipelineError {
    pub fn rule(rule: impl Into<String>, source: RuleError) -> Self {
        Self::Rule {
            rule: rule.into(),
            source,
        }
    }
}
