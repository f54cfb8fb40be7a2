//! Computed style capability.
//!
//! Detectors never look at markup for presentation decisions; they ask an
//! oracle resolved from the tree as it stands after the mutation rules.

use crate::document::{Document, ElementRef};
use crate::error::RuleError;

/// Effective style of elements in one document snapshot.
pub trait StyleOracle {
    /// Computed value of a longhand property, or `None` when nothing in the
    /// cascade sets it.
    fn property(&self, element: &ElementRef, name: &str) -> Option<String>;

    /// Computed `outline-style`.
    fn outline_style(&self, element: &ElementRef) -> Option<String> {
        self.property(element, "outline-style")
    }
}

/// Builds a [`StyleOracle`] for the current state of a document.
pub trait StyleResolver: Send + Sync {
    fn resolve(&self, document: &Document) -> Result<Box<dyn StyleOracle>, RuleError>;
}
