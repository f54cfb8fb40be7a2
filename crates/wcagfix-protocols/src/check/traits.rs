//! Detector and remediator traits.

use super::{Issue, IssueKind};
use crate::document::Document;
use crate::error::RuleError;
use crate::rule::{RuleDefinition, RuleOutcome};
use crate::style::StyleOracle;

/// Read-only pass that reports elements failing a predicate.
pub trait IssueDetector: Send + Sync {
    /// Returns the detector definition.
    fn definition(&self) -> &RuleDefinition;

    /// Kind of issue this detector raises.
    fn kind(&self) -> IssueKind;

    /// Scan the document. Issues come back in document order, one per element.
    fn detect(&self, document: &Document, styles: &dyn StyleOracle) -> Result<Vec<Issue>, RuleError>;
}

/// Write-only pass that fixes every reported issue.
pub trait IssueRemediator: Send + Sync {
    /// Returns the remediator definition.
    fn definition(&self) -> &RuleDefinition;

    /// Kind of issue this remediator fixes.
    fn kind(&self) -> IssueKind;

    /// Apply the fix to each issue. Issues of another kind are ignored.
    fn remediate(&self, issues: &[Issue]) -> Result<RuleOutcome, RuleError>;
}
