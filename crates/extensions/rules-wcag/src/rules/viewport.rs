//! Viewport meta rewrite for text resizing and reflow (1.4.4, 1.4.10).

use tracing::debug;

use wcagfix_protocols::document::{Document, ElementExt};
use wcagfix_protocols::error::RuleError;
use wcagfix_protocols::rule::{Rule, RuleDefinition, RuleOutcome};
use wcagfix_protocols::types::WcagLevel;

use super::definition;

/// Viewport content that allows zooming up to 3x.
pub const VIEWPORT_CONTENT: &str =
    "width=device-width, initial-scale=1, maximum-scale=3, user-scalable=yes";

/// Rewrites the viewport meta tag so users can zoom.
///
/// Only an existing tag is rewritten; a page without one is left alone.
pub struct ViewportResizeRule {
    definition: RuleDefinition,
}

impl ViewportResizeRule {
    pub fn new() -> Self {
        Self {
            definition: definition(
                "viewport-resize",
                "Viewport Resize",
                "Allows user zoom up to 3x in the viewport meta tag",
                &[("1.4.4", WcagLevel::AA), ("1.4.10", WcagLevel::AA)],
            ),
        }
    }
}

impl Default for ViewportResizeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ViewportResizeRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        let Some(meta) = document.select_first(r#"meta[name="viewport"]"#)? else {
            return Ok(RuleOutcome::unchanged());
        };

        let previous = meta.attr("content");
        if previous.as_deref() == Some(VIEWPORT_CONTENT) {
            return Ok(RuleOutcome::unchanged());
        }

        debug!(previous = ?previous, "Rewriting viewport meta content");
        meta.set_attr("content", VIEWPORT_CONTENT);
        Ok(RuleOutcome::changed(1))
    }
}
