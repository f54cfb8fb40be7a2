//! Rule definition types.

use serde::{Deserialize, Serialize};

use crate::types::SuccessCriterion;

/// Definition of a rule or check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Unique identifier, e.g. `autocomplete`.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// What the rule changes.
    pub description: String,

    /// WCAG success criteria the rule addresses.
    #[serde(default)]
    pub criteria: Vec<SuccessCriterion>,

    /// Extension ID that provides this rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_id: Option<String>,
}

impl RuleDefinition {
    /// Create a new rule definition.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            criteria: Vec::new(),
            extension_id: None,
        }
    }

    /// Add a success criterion.
    pub fn with_criterion(mut self, criterion: SuccessCriterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Record the providing extension.
    pub fn with_extension(mut self, extension_id: impl Into<String>) -> Self {
        self.extension_id = Some(extension_id.into());
        self
    }

    /// Comma-separated criterion numbers, e.g. `1.4.4, 1.4.10`.
    pub fn criteria_label(&self) -> String {
        self.criteria
            .iter()
            .map(|c| c.number.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
