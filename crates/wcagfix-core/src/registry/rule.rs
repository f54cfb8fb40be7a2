//! Rule and check registry.

use std::sync::Arc;

use wcagfix_protocols::check::{IssueDetector, IssueRemediator};
use wcagfix_protocols::error::ExtensionError;
use wcagfix_protocols::extension::RuleRegistryAccess;
use wcagfix_protocols::rule::{Rule, RuleDefinition};

use super::base::{OrderedRegistry, Registerable};

impl Registerable for dyn Rule {
    fn registry_id(&self) -> &str {
        &self.definition().id
    }
}

/// A detector with the remediator that fixes what it finds.
#[derive(Clone)]
pub struct CheckPair {
    pub detector: Arc<dyn IssueDetector>,
    pub remediator: Arc<dyn IssueRemediator>,
}

impl Registerable for CheckPair {
    fn registry_id(&self) -> &str {
        &self.detector.definition().id
    }
}

/// Mutation rules and checks, each in registration order.
///
/// Rule and check IDs share one namespace.
pub struct RuleRegistry {
    rules: OrderedRegistry<dyn Rule>,
    checks: OrderedRegistry<CheckPair>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: OrderedRegistry::new(),
            checks: OrderedRegistry::new(),
        }
    }

    pub fn register(&mut self, rule: Arc<dyn Rule>) -> Result<(), ExtensionError> {
        if self.checks.contains(rule.id()) {
            return Err(ExtensionError::AlreadyRegistered(rule.id().to_string()));
        }
        self.rules.register(rule)
    }

    /// Register a check. Both halves must handle the same issue kind.
    pub fn register_pair(
        &mut self,
        detector: Arc<dyn IssueDetector>,
        remediator: Arc<dyn IssueRemediator>,
    ) -> Result<(), ExtensionError> {
        let id = detector.definition().id.clone();
        if detector.kind() != remediator.kind() {
            return Err(ExtensionError::RegistrationFailed(format!(
                "check '{}' detects {} but its remediator fixes {}",
                id,
                detector.kind(),
                remediator.kind()
            )));
        }
        if self.rules.contains(&id) {
            return Err(ExtensionError::AlreadyRegistered(id));
        }
        self.checks.register(Arc::new(CheckPair {
            detector,
            remediator,
        }))
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Rule>> {
        self.rules.get(id)
    }

    /// Mutation rules in run order.
    pub fn rules(&self) -> impl Iterator<Item = &Arc<dyn Rule>> + '_ {
        self.rules.iter()
    }

    /// Checks in run order.
    pub fn checks(&self) -> impl Iterator<Item = &Arc<CheckPair>> + '_ {
        self.checks.iter()
    }

    /// Rule definitions in run order.
    pub fn list(&self) -> Vec<RuleDefinition> {
        self.rules.iter().map(|r| r.definition().clone()).collect()
    }

    /// Detector definitions in run order.
    pub fn list_checks(&self) -> Vec<RuleDefinition> {
        self.checks
            .iter()
            .map(|c| c.detector.definition().clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.checks.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistryAccess for RuleRegistry {
    fn register_rule(&mut self, rule: Arc<dyn Rule>) -> Result<(), ExtensionError> {
        self.register(rule)
    }

    fn register_check(
        &mut self,
        detector: Arc<dyn IssueDetector>,
        remediator: Arc<dyn IssueRemediator>,
    ) -> Result<(), ExtensionError> {
        self.register_pair(detector, remediator)
    }
}
