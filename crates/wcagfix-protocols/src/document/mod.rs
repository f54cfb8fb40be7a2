//! Document handle shared by every rule in a run.
//!
//! The tree is parsed once by the orchestrator and passed explicitly to each
//! rule; nothing in the workspace keeps a global document.

mod element;
mod tree;

pub use element::{ElementExt, ElementRef};
pub use tree::Document;

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
