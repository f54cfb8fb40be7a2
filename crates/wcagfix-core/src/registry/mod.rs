//! Registries for extensions, rules and checks.

mod base;
mod extension;
mod rule;

pub use base::{OrderedRegistry, Registerable};
pub use extension::ExtensionRegistry;
pub use rule::{CheckPair, RuleRegistry};
