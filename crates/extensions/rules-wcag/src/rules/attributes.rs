//! Single-attribute rules: orientation, landmark role, label title, timer.

use wcagfix_protocols::document::{Document, ElementExt};
use wcagfix_protocols::error::RuleError;
use wcagfix_protocols::rule::{Rule, RuleDefinition, RuleOutcome};
use wcagfix_protocols::types::WcagLevel;

use super::definition;

/// Strips `orientation` attributes (1.3.4).
pub struct RemoveOrientationRule {
    definition: RuleDefinition,
}

impl RemoveOrientationRule {
    pub fn new() -> Self {
        Self {
            definition: definition(
                "remove-orientation",
                "Remove Orientation Lock",
                "Removes the orientation attribute from every element",
                &[("1.3.4", WcagLevel::AA)],
            ),
        }
    }
}

impl Default for RemoveOrientationRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for RemoveOrientationRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        let changed = document
            .select("[orientation]")?
            .iter()
            .filter(|el| el.remove_attr("orientation"))
            .count();
        Ok(RuleOutcome::changed(changed))
    }
}

/// Gives identified `<div>` containers a `region` landmark role (1.3.6).
pub struct LandmarkRoleRule {
    definition: RuleDefinition,
}

impl LandmarkRoleRule {
    pub fn new() -> Self {
        Self {
            definition: definition(
                "landmark-role",
                "Landmark Role",
                "Sets role=\"region\" on div elements with an id and no role",
                &[("1.3.6", WcagLevel::AAA)],
            ),
        }
    }
}

impl Default for LandmarkRoleRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for LandmarkRoleRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        let mut changed = 0;
        for div in document.select("div")? {
            let has_id = div.attr("id").is_some_and(|id| !id.is_empty());
            if has_id && !div.has_attr("role") {
                div.set_attr("role", "region");
                changed += 1;
            }
        }
        Ok(RuleOutcome::changed(changed))
    }
}

/// Copies a label's text into its `title` (3.3.2).
pub struct LabelTitleRule {
    definition: RuleDefinition,
}

impl LabelTitleRule {
    pub fn new() -> Self {
        Self {
            definition: definition(
                "label-title",
                "Label Title",
                "Sets the title of untitled labels to their text content",
                &[("3.3.2", WcagLevel::A)],
            ),
        }
    }
}

impl Default for LabelTitleRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for LabelTitleRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        let mut changed = 0;
        for label in document.select("label")? {
            if !label.has_attr("title") {
                label.set_attr("title", &label.text());
                changed += 1;
            }
        }
        Ok(RuleOutcome::changed(changed))
    }
}

/// Silences live announcements of timers (2.2.1).
pub struct TimerLiveRule {
    definition: RuleDefinition,
}

impl TimerLiveRule {
    pub fn new() -> Self {
        Self {
            definition: definition(
                "timer-live",
                "Quiet Timers",
                "Sets aria-live=\"off\" on elements with role=\"timer\"",
                &[("2.2.1", WcagLevel::A)],
            ),
        }
    }
}

impl Default for TimerLiveRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for TimerLiveRule {
    fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        let mut changed = 0;
        for timer in document.select(r#"[role="timer"]"#)? {
            if timer.attr("aria-live").as_deref() != Some("off") {
                timer.set_attr("aria-live", "off");
                changed += 1;
            }
        }
        Ok(RuleOutcome::changed(changed))
    }
}
