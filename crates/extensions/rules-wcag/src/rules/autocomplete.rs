//! Autocomplete default for inputs (1.3.5).

use wcagfix_protocols::document::{Document, ElementExt};
use wcagfix_protocols::error::RuleError;
use wcagfix_protocols::rule::{Rule, RuleDefinition, RuleOutcome};
use wcagfix_protocols::types::WcagLevel;

use super::definition;

/// Sets `autocomplete="on"` on inputs that do not declare it.
pub struct AutocompleteRule {
    definition: RuleDefinition,
}

impl AutocompleteRule {
    pub fn new() -> Self {
        Self {
            definition: definition(
                "autocomplete",
                "Autocomplete",
                "Sets autocomplete=\"on\" on inputs without an autocomplete attribute",
                &[("1.3.5", WcagLevel::AA)],
            ),
        }
    }
}

impl Default for AutocompleteRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for AutocompleteRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        let mut changed = 0;
        for input in document.select("input")? {
            // An explicit value, even "off" or "", is the author's decision.
            if !input.has_attr("autocomplete") {
                input.set_attr("autocomplete", "on");
                changed += 1;
            }
        }
        Ok(RuleOutcome::changed(changed))
    }
}
