//! Extension registration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Rule already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Extension registration failed: {0}")]
    RegistrationFailed(String),
}
