//! Stylesheet fragments for reflow (1.4.10) and focus rings (2.4.7, 1.4.11).
//!
//! Each fragment is inserted once. The `<style>` element carries a marker
//! attribute naming the rule, and the rule does nothing when a marked element
//! is already in the document.

use wcagfix_protocols::document::Document;
use wcagfix_protocols::error::RuleError;
use wcagfix_protocols::rule::{Rule, RuleDefinition, RuleOutcome};
use wcagfix_protocols::types::WcagLevel;

use super::definition;

/// Attribute identifying inserted fragments; its value is the rule id.
pub const STYLESHEET_MARKER: &str = "data-wcagfix";

/// Base font-size normalization plus a flex row/column utility pair.
pub const REFLOW_CSS: &str = "
body { font-size: 100%; }
.row { display: flex; flex-wrap: wrap; }
.col { flex: 1; }
";

/// Uniform focus ring for interactive elements.
pub const FOCUS_CSS: &str = "
a:focus, button:focus, input:focus, select:focus, textarea:focus {
  outline: 2px solid #00f;
  outline-offset: 2px;
}
";

/// Ensures a stylesheet fragment is present in `<head>`.
pub struct EnsureStylesheetRule {
    definition: RuleDefinition,
    css: &'static str,
}

impl EnsureStylesheetRule {
    /// Rule for the reflow fragment.
    pub fn reflow() -> Self {
        Self {
            definition: definition(
                "reflow-css",
                "Reflow Stylesheet",
                "Adds font-size normalization and flex row/column utilities",
                &[("1.4.10", WcagLevel::AA)],
            ),
            css: REFLOW_CSS,
        }
    }

    /// Rule for the focus-ring fragment.
    pub fn focus_ring() -> Self {
        Self {
            definition: definition(
                "focus-css",
                "Focus Ring Stylesheet",
                "Adds a 2px solid focus outline for links and form controls",
                &[("2.4.7", WcagLevel::AA), ("1.4.11", WcagLevel::AA)],
            ),
            css: FOCUS_CSS,
        }
    }

    fn marker_selector(&self) -> String {
        format!(r#"style[{}="{}"]"#, STYLESHEET_MARKER, self.definition.id)
    }
}

impl Rule for EnsureStylesheetRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        if document.select_first(&self.marker_selector())?.is_some() {
            return Ok(RuleOutcome::unchanged());
        }
        document.append_style(self.css, &[(STYLESHEET_MARKER, self.definition.id.as_str())])?;
        Ok(RuleOutcome::changed(1))
    }
}
