//! Markup rule implementations.

mod aria_required;
mod attributes;
mod autocomplete;
mod lang;
mod new_tab;
mod parsing_id;
mod stylesheet;
mod viewport;

use std::sync::Arc;

use wcagfix_protocols::rule::{Rule, RuleDefinition};
use wcagfix_protocols::types::{SuccessCriterion, WcagLevel};

pub use aria_required::AriaRequiredRule;
pub use attributes::{LabelTitleRule, LandmarkRoleRule, RemoveOrientationRule, TimerLiveRule};
pub use autocomplete::AutocompleteRule;
pub use lang::{DocumentLangRule, LangPartsRule, DEFAULT_LANG};
pub use new_tab::{NewTabWarningRule, NEW_TAB_TITLE};
pub use parsing_id::ParsingIdRule;
pub use stylesheet::{EnsureStylesheetRule, FOCUS_CSS, REFLOW_CSS, STYLESHEET_MARKER};
pub use viewport::{ViewportResizeRule, VIEWPORT_CONTENT};

const EXTENSION_ID: &str = "rules-wcag";

/// Build a definition tagged with this extension and its WCAG criteria.
fn definition(
    id: &str,
    name: &str,
    description: &str,
    criteria: &[(&str, WcagLevel)],
) -> RuleDefinition {
    criteria.iter().fold(
        RuleDefinition::new(id, name, description).with_extension(EXTENSION_ID),
        |def, (number, level)| def.with_criterion(SuccessCriterion::new(*number, *level)),
    )
}

/// Every markup rule, in the order the pipeline runs them.
pub fn default_rules() -> Vec<Arc<dyn Rule>> {
    vec![
        Arc::new(RemoveOrientationRule::new()),
        Arc::new(AutocompleteRule::new()),
        Arc::new(LandmarkRoleRule::new()),
        Arc::new(ViewportResizeRule::new()),
        Arc::new(EnsureStylesheetRule::reflow()),
        Arc::new(LabelTitleRule::new()),
        Arc::new(EnsureStylesheetRule::focus_ring()),
        Arc::new(DocumentLangRule::new()),
        Arc::new(LangPartsRule::new()),
        Arc::new(TimerLiveRule::new()),
        Arc::new(NewTabWarningRule::new()),
        Arc::new(AriaRequiredRule::new()),
        Arc::new(ParsingIdRule::new()),
    ]
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
