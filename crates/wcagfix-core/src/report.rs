//! Run report.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wcagfix_protocols::check::IssueSummary;
use wcagfix_protocols::rule::{RuleDefinition, RuleOutcome};

/// What one rule, or one remediator, changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReport {
    pub id: String,
    /// WCAG success criteria, e.g. `1.4.4, 1.4.10`.
    pub criteria: String,
    pub changed: usize,
}

impl RuleReport {
    pub fn new(definition: &RuleDefinition, outcome: RuleOutcome) -> Self {
        Self {
            id: definition.id.clone(),
            criteria: definition.criteria_label(),
            changed: outcome.changed,
        }
    }
}

/// Record of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Source as configured (URL or path).
    pub source: String,
    /// Where the markup actually came from, e.g. after redirects.
    pub location: String,
    pub output: PathBuf,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    /// Mutation rules, in run order.
    pub rules: Vec<RuleReport>,
    pub issues: Vec<IssueSummary>,
    /// Remediators, in run order.
    pub fixes: Vec<RuleReport>,
    pub bytes_written: usize,
}

impl RunReport {
    /// Elements changed by rules and remediators together.
    pub fn total_changes(&self) -> usize {
        self.rules.iter().chain(&self.fixes).map(|r| r.changed).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
