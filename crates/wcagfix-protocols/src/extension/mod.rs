//! Extension protocol definitions.
//!
//! Extensions bundle rules and checks and register them with the pipeline.

mod manifest;
mod traits;

pub use manifest::*;
pub use traits::*;
