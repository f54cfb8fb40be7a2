//! Language attributes (3.1.1, 3.1.2).

use wcagfix_protocols::document::{Document, ElementExt};
use wcagfix_protocols::error::RuleError;
use wcagfix_protocols::rule::{Rule, RuleDefinition, RuleOutcome};
use wcagfix_protocols::types::WcagLevel;

use super::definition;

/// Locale applied when a document does not declare one.
pub const DEFAULT_LANG: &str = "en";

/// Sets `lang` on the root element when it is missing (3.1.1).
pub struct DocumentLangRule {
    definition: RuleDefinition,
}

impl DocumentLangRule {
    pub fn new() -> Self {
        Self {
            definition: definition(
                "document-lang",
                "Document Language",
                "Sets lang=\"en\" on the html element when it has no lang attribute",
                &[("3.1.1", WcagLevel::A)],
            ),
        }
    }
}

impl Default for DocumentLangRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for DocumentLangRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        match document.document_element() {
            Some(root) if !root.has_attr("lang") => {
                root.set_attr("lang", DEFAULT_LANG);
                Ok(RuleOutcome::changed(1))
            }
            _ => Ok(RuleOutcome::unchanged()),
        }
    }
}

/// Language of parts (3.1.2).
///
/// Walks `[lang]` elements and fills in the language only where the attribute
/// is absent. Every element the selector yields already has the attribute, so
/// the rule never changes anything; see DESIGN.md before widening it.
pub struct LangPartsRule {
    definition: RuleDefinition,
}

impl LangPartsRule {
    pub fn new() -> Self {
        Self {
            definition: definition(
                "lang-parts",
                "Language of Parts",
                "Fills in missing lang attributes on language-tagged elements",
                &[("3.1.2", WcagLevel::AA)],
            ),
        }
    }
}

impl Default for LangPartsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for LangPartsRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        let mut changed = 0;
        for el in document.select("[lang]")? {
            if !el.has_attr("lang") {
                el.set_attr("lang", DEFAULT_LANG);
                changed += 1;
            }
        }
        Ok(RuleOutcome::changed(changed))
    }
}
