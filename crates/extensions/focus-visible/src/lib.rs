//! Focus-visible check for wcagfix (WCAG 2.4.7).
//!
//! The detector asks a style oracle for each interactive element's effective
//! `outline-style` and flags elements without a visible outline; the
//! remediator then pins an inline focus outline and a diagnostic title on
//! every flagged element.
//!
//! The oracle shipped here ([`CascadeResolver`]) resolves style from the
//! document's own `<style>` elements and inline `style` attributes.

mod detector;
mod extension;
mod remediator;
pub mod style;

pub use detector::{FocusVisibleDetector, INTERACTIVE_SELECTOR};
pub use extension::FocusVisibleExtension;
pub use remediator::{FocusVisibleRemediator, FOCUS_FIX_TITLE, FOCUS_OUTLINE, FOCUS_OUTLINE_OFFSET};
pub use style::{Cascade, CascadeResolver, InlineStyle};
