//! Required-field marking for labelled inputs (3.3.2).

use wcagfix_protocols::document::{Document, ElementExt};
use wcagfix_protocols::error::RuleError;
use wcagfix_protocols::rule::{Rule, RuleDefinition, RuleOutcome};
use wcagfix_protocols::types::WcagLevel;

use super::definition;

/// Label text fragments that mark a field as mandatory.
const REQUIRED_MARKERS: [&str; 2] = ["*", "required"];

/// Sets `aria-required="true"` on the input right after a label whose text
/// marks the field as mandatory.
pub struct AriaRequiredRule {
    definition: RuleDefinition,
}

impl AriaRequiredRule {
    pub fn new() -> Self {
        Self {
            definition: definition(
                "aria-required",
                "ARIA Required",
                "Marks inputs following a \"*\" or \"required\" label with aria-required=\"true\"",
                &[("3.3.2", WcagLevel::A)],
            ),
        }
    }
}

impl Default for AriaRequiredRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for AriaRequiredRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        let mut changed = 0;
        for label in document.select("label")? {
            let text = label.text();
            if !REQUIRED_MARKERS.iter().any(|marker| text.contains(marker)) {
                continue;
            }
            let Some(input) = label.next_element_sibling() else {
                continue;
            };
            if input.tag_name() == "input" && input.attr("aria-required").as_deref() != Some("true") {
                input.set_attr("aria-required", "true");
                changed += 1;
            }
        }
        Ok(RuleOutcome::changed(changed))
    }
}
