//! Focus-visible remediator.

use tracing::debug;
use wcagfix_protocols::check::{Issue, IssueKind, IssueRemediator};
use wcagfix_protocols::document::ElementExt;
use wcagfix_protocols::error::RuleError;
use wcagfix_protocols::rule::{RuleDefinition, RuleOutcome};
use wcagfix_protocols::types::{SuccessCriterion, WcagLevel};

use crate::extension::EXTENSION_ID;
use crate::style::InlineStyle;

/// Inline outline pinned on flagged elements.
pub const FOCUS_OUTLINE: &str = "2px solid #00f";
pub const FOCUS_OUTLINE_OFFSET: &str = "2px";
/// Title marking a remediated element.
pub const FOCUS_FIX_TITLE: &str = "Focus visible fix applied";

/// Gives every flagged element an inline focus outline.
///
/// Other inline declarations are kept. The element's `title` is overwritten.
pub struct FocusVisibleRemediator {
    definition: RuleDefinition,
}

impl FocusVisibleRemediator {
    pub fn new() -> Self {
        Self {
            definition: RuleDefinition::new(
                "focus-visible-fix",
                "Focus Visible Fix",
                "Adds an inline outline and a diagnostic title to elements without a visible focus indicator",
            )
            .with_criterion(SuccessCriterion::new("2.4.7", WcagLevel::AA))
            .with_extension(EXTENSION_ID),
        }
    }
}

impl Default for FocusVisibleRemediator {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueRemediator for FocusVisibleRemediator {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn kind(&self) -> IssueKind {
        IssueKind::FocusNotVisible
    }

    fn remediate(&self, issues: &[Issue]) -> Result<RuleOutcome, RuleError> {
        let mut changed = 0;
        for issue in issues.iter().filter(|i| i.kind == self.kind()) {
            let mut style = InlineStyle::of(&issue.element);
            style.set("outline", FOCUS_OUTLINE);
            style.set("outline-offset", FOCUS_OUTLINE_OFFSET);
            style.apply_to(&issue.element);
            issue.element.set_attr("title", FOCUS_FIX_TITLE);
            debug!(element = %issue.element.describe(), "Applied focus outline");
            changed += 1;
        }
        Ok(RuleOutcome::changed(changed))
    }
}
