//! Issue records.

use serde::{Deserialize, Serialize};

use crate::document::{ElementExt, ElementRef};

/// Kind of issue a detector can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Interactive element without a visible focus indicator.
    FocusNotVisible,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FocusNotVisible => write!(f, "focus_not_visible"),
        }
    }
}

/// An element flagged by a detector.
///
/// Lives only between detection and remediation within one run.
#[derive(Clone)]
pub struct Issue {
    pub element: ElementRef,
    pub kind: IssueKind,
    pub detector_id: String,
    pub reason: String,
}

impl Issue {
    pub fn new(
        element: ElementRef,
        kind: IssueKind,
        detector_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            element,
            kind,
            detector_id: detector_id.into(),
            reason: reason.into(),
        }
    }

    /// Detached summary for reporting.
    pub fn summary(&self) -> IssueSummary {
        IssueSummary {
            kind: self.kind,
            detector_id: self.detector_id.clone(),
            element: self.element.describe(),
            reason: self.reason.clone(),
        }
    }
}

impl std::fmt::Debug for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Issue")
            .field("element", &self.element.describe())
            .field("kind", &self.kind)
            .field("detector_id", &self.detector_id)
            .field("reason", &self.reason)
            .finish()
    }
}

/// Serializable view of an [`Issue`] that outlives the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub kind: IssueKind,
    pub detector_id: String,
    pub element: String,
    pub reason: String,
}
