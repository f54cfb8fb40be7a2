//! # wcagfix Protocols
//!
//! Core protocol definitions (traits) for the wcagfix pipeline.
//! Contains interface definitions and the shared document handle - no rules.
//!
//! ## Core Traits
//!
//! - [`Extension`] - Base trait for everything that contributes rules or checks
//! - [`Rule`] - Trait for DOM mutation rules
//! - [`IssueDetector`] / [`IssueRemediator`] - Two-phase style-dependent checks
//! - [`StyleResolver`] / [`StyleOracle`] - Computed style capability
//! - [`DocumentSource`] - Trait for document acquisition

pub mod check;
pub mod document;
pub mod error;
pub mod extension;
pub mod rule;
pub mod source;
pub mod style;
pub mod types;

// Re-export core traits
pub use check::{Issue, IssueDetector, IssueKind, IssueRemediator, IssueSummary};
pub use document::{Document, ElementExt, ElementRef};
pub use error::{AcquireError, ExtensionError, RuleError};
pub use extension::{Extension, ExtensionManifest, Provides, RuleRegistryAccess};
pub use rule::{Rule, RuleDefinition, RuleOutcome};
pub use source::{AcquiredDocument, DocumentSource};
pub use style::{StyleOracle, StyleResolver};
pub use types::*;
