//! Rule trait definition.

use super::{RuleDefinition, RuleOutcome};
use crate::document::Document;
use crate::error::RuleError;

/// Core trait for mutation rules.
///
/// A rule must be total over any well-formed document: finding nothing to
/// change is a no-op, not an error. It must also be idempotent, deriving every
/// decision from the current tree so a second application changes nothing.
pub trait Rule: Send + Sync {
    /// Returns the rule definition.
    fn definition(&self) -> &RuleDefinition;

    /// Apply the rule to the document.
    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError>;

    /// Returns the rule id.
    fn id(&self) -> &str {
        &self.definition().id
    }
}
