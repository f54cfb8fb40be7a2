//! Minimal CSS cascade used as the computed-style oracle.
//!
//! Supported: every `<style>` element in document order, inline `style`
//! attributes, `!important`, selector specificity, and the `outline`
//! shorthand. At-rules and external stylesheets are ignored, and dynamic
//! pseudo-classes such as `:focus` never match.

mod cascade;
mod inline;
mod outline;
mod sheet;

pub use cascade::{Cascade, CascadeResolver};
pub use inline::InlineStyle;
pub use outline::expand_shorthands;
pub use sheet::{parse_declarations, parse_stylesheet, Declaration, StyleRule};
