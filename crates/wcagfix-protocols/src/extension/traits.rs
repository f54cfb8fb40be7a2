//! Extension trait definition.

use std::sync::Arc;

use super::ExtensionManifest;
use crate::check::{IssueDetector, IssueRemediator};
use crate::error::ExtensionError;
use crate::rule::Rule;

/// Core trait for all extensions.
///
/// Every extension provides a manifest and registers what it contributes.
/// Registration order is the run order.
pub trait Extension: Send + Sync {
    /// Returns the extension manifest.
    fn manifest(&self) -> &ExtensionManifest;

    /// Register rules and checks.
    fn register(&self, registry: &mut dyn RuleRegistryAccess) -> Result<(), ExtensionError>;
}

/// Trait for accessing the rule registry from extensions.
pub trait RuleRegistryAccess {
    /// Append a mutation rule.
    fn register_rule(&mut self, rule: Arc<dyn Rule>) -> Result<(), ExtensionError>;

    /// Append a detector/remediator pair.
    fn register_check(
        &mut self,
        detector: Arc<dyn IssueDetector>,
        remediator: Arc<dyn IssueRemediator>,
    ) -> Result<(), ExtensionError>;
}
