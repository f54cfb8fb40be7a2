//! New-window warnings on links (3.2.5).

use wcagfix_protocols::document::{Document, ElementExt};
use wcagfix_protocols::error::RuleError;
use wcagfix_protocols::rule::{Rule, RuleDefinition, RuleOutcome};
use wcagfix_protocols::types::WcagLevel;

use super::definition;

/// Tooltip set on links that open a new browsing context.
pub const NEW_TAB_TITLE: &str = "Opens in a new tab";

/// Titles `target="_blank"` links with a new-tab warning, replacing any
/// existing title.
///
/// The focus-visible remediator runs after every rule and overwrites the title
/// of any link it fixes. On a rerun that link is no longer flagged, so its
/// title goes back to [`NEW_TAB_TITLE`].
pub struct NewTabWarningRule {
    definition: RuleDefinition,
}

impl NewTabWarningRule {
    pub fn new() -> Self {
        Self {
            definition: definition(
                "new-tab-warning",
                "New Tab Warning",
                "Sets title=\"Opens in a new tab\" on links with target=\"_blank\"",
                &[("3.2.5", WcagLevel::AAA)],
            ),
        }
    }
}

impl Default for NewTabWarningRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NewTabWarningRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        let mut changed = 0;
        for link in document.select(r#"a[target="_blank"]"#)? {
            if link.attr("title").as_deref() != Some(NEW_TAB_TITLE) {
                link.set_attr("title", NEW_TAB_TITLE);
                changed += 1;
            }
        }
        Ok(RuleOutcome::changed(changed))
    }
}
