//! # wcagfix Core
//!
//! Runs one document through the remediation pipeline.
//!
//! ## Components
//!
//! - [`RuleRegistry`] / [`ExtensionRegistry`] - Ordered rule and check registration
//! - [`Pipeline`] - Mutation rules, then detector/remediator pairs, over one tree
//! - [`Orchestrator`] - Acquire, transform, serialize and persist
//! - [`RunReport`] - Serializable record of a run

pub mod error;
pub mod orchestrator;
pub mod pipeline;
pub mod registry;
pub mod report;

pub use error::PipelineError;
pub use orchestrator::Orchestrator;
pub use pipeline::{Pipeline, PipelineOutcome};
pub use registry::{CheckPair, ExtensionRegistry, RuleRegistry};
pub use report::{RuleReport, RunReport};
