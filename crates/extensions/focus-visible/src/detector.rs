//! Focus-visible detector.

use tracing::debug;
use wcagfix_protocols::check::{Issue, IssueDetector, IssueKind};
use wcagfix_protocols::document::{Document, ElementExt};
use wcagfix_protocols::error::RuleError;
use wcagfix_protocols::rule::RuleDefinition;
use wcagfix_protocols::style::StyleOracle;
use wcagfix_protocols::types::{SuccessCriterion, WcagLevel};

use crate::extension::EXTENSION_ID;

/// Elements that can take keyboard focus.
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, select, textarea, [tabindex]";

/// Flags interactive elements whose effective `outline-style` is absent or `none`.
pub struct FocusVisibleDetector {
    definition: RuleDefinition,
}

impl FocusVisibleDetector {
    pub fn new() -> Self {
        Self {
            definition: RuleDefinition::new(
                "focus-visible",
                "Focus Visible",
                "Flags focusable elements whose computed outline-style is missing or none",
            )
            .with_criterion(SuccessCriterion::new("2.4.7", WcagLevel::AA))
            .with_extension(EXTENSION_ID),
        }
    }
}

impl Default for FocusVisibleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueDetector for FocusVisibleDetector {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn kind(&self) -> IssueKind {
        IssueKind::FocusNotVisible
    }

    fn detect(&self, document: &Document, styles: &dyn StyleOracle) -> Result<Vec<Issue>, RuleError> {
        let mut issues = Vec::new();
        for element in document.select(INTERACTIVE_SELECTOR)? {
            let reason = match styles.outline_style(&element) {
                None => "no outline-style in effect",
                Some(style) if style.eq_ignore_ascii_case("none") => "outline-style is none",
                Some(_) => continue,
            };
            debug!(element = %element.describe(), reason, "Focus indicator missing");
            issues.push(Issue::new(element, self.kind(), &self.definition.id, reason));
        }
        Ok(issues)
    }
}
