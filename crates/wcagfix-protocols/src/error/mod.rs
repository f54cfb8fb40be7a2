//! Error types for the wcagfix protocol layer.

mod acquire;
mod extension;
mod rule;

pub use acquire::*;
pub use extension::*;
pub use rule::*;
