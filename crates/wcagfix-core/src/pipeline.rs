//! Rule and check sequencing over one document.

use std::sync::Arc;

use tracing::debug;
use wcagfix_protocols::check::IssueSummary;
use wcagfix_protocols::document::Document;
use wcagfix_protocols::style::StyleResolver;

use crate::error::PipelineError;
use crate::registry::RuleRegistry;
use crate::report::RuleReport;

/// What a pipeline pass did to a document.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutcome {
    pub rules: Vec<RuleReport>,
    pub issues: Vec<IssueSummary>,
    pub fixes: Vec<RuleReport>,
}

/// Runs every mutation rule in registration order, then every check.
///
/// Each check resolves style from the tree as it stands when the check
/// starts, so detectors see every mutation and remediators write last.
pub struct Pipeline {
    registry: Arc<RuleRegistry>,
    styles: Arc<dyn StyleResolver>,
}

impl Pipeline {
    pub fn new(registry: Arc<RuleRegistry>, styles: Arc<dyn StyleResolver>) -> Self {
        Self { registry, styles }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Transform `document` in place. Stops at the first failing rule.
    pub fn run(&self, document: &Document) -> Result<PipelineOutcome, PipelineError> {
        let mut outcome = PipelineOutcome::default();

        for rule in self.registry.rules() {
            let result = rule
                .apply(document)
                .map_err(|e| PipelineError::rule(rule.id(), e))?;
            debug!(rule = rule.id(), changed = result.changed, "Applied rule");
            outcome.rules.push(RuleReport::new(rule.definition(), result));
        }

        for check in self.registry.checks() {
            let detector_id = &check.detector.definition().id;
            let styles = self
                .styles
                .resolve(document)
                .map_err(|e| PipelineError::rule(detector_id, e))?;
            let issues = check
                .detector
                .detect(document, styles.as_ref())
                .map_err(|e| PipelineError::rule(detector_id, e))?;
            debug!(check = %detector_id, issues = issues.len(), "Detection finished");

            let fixed = check
                .remediator
                .remediate(&issues)
                .map_err(|e| PipelineError::rule(&check.remediator.definition().id, e))?;
            debug!(
                remediator = %check.remediator.definition().id,
                changed = fixed.changed,
                "Remediation finished"
            );

            outcome.issues.extend(issues.iter().map(|issue| issue.summary()));
            outcome
                .fixes
                .push(RuleReport::new(check.remediator.definition(), fixed));
        }

        Ok(outcome)
    }
}
