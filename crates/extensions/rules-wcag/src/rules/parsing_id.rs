//! Empty identifiers (4.1.1).

use tracing::debug;
use uuid::Uuid;

use wcagfix_protocols::document::{Document, ElementExt};
use wcagfix_protocols::error::RuleError;
use wcagfix_protocols::rule::{Rule, RuleDefinition, RuleOutcome};
use wcagfix_protocols::types::WcagLevel;

use super::definition;

const GENERATED_ID_PREFIX: &str = "generated-id-";

/// Replaces empty `id` attributes with a generated identifier.
pub struct ParsingIdRule {
    definition: RuleDefinition,
}

impl ParsingIdRule {
    pub fn new() -> Self {
        Self {
            definition: definition(
                "parsing-id",
                "Parsing Identifiers",
                "Generates an identifier for elements whose id attribute is empty",
                &[("4.1.1", WcagLevel::A)],
            ),
        }
    }

    fn generate_id() -> String {
        let random = Uuid::new_v4().simple().to_string();
        format!("{}{}", GENERATED_ID_PREFIX, &random[..9])
    }
}

impl Default for ParsingIdRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ParsingIdRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        let mut changed = 0;
        for el in document.select("[id]")? {
            if el.attr("id").is_some_and(|id| id.is_empty()) {
                let id = Self::generate_id();
                debug!(element = el.tag_name(), id = %id, "Generated identifier");
                el.set_attr("id", &id);
                changed += 1;
            }
        }
        Ok(RuleOutcome::changed(changed))
    }
}
