//! Rule and check execution errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Document has no <{0}> element")]
    MissingElement(String),
}
