//! Common types used across the wcagfix workspace.

mod common;

pub use common::*;
