//! WCAG markup rules for wcagfix.
//!
//! Provides the ordered set of DOM mutation rules: attribute fixes, viewport
//! and language defaults, and the reflow and focus-ring stylesheets.

mod extension;
mod rules;

pub use extension::WcagRulesExtension;
pub use rules::*;
