//! Rule outcome types.

use serde::{Deserialize, Serialize};

/// What a single rule did during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Number of elements the rule changed or inserted.
    pub changed: usize,
}

impl RuleOutcome {
    pub fn changed(changed: usize) -> Self {
        Self { changed }
    }

    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn is_noop(&self) -> bool {
        self.changed == 0
    }
}
