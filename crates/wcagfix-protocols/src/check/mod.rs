//! Check protocol definitions.
//!
//! A check is a detector/remediator pair. Detection is a read-only pass that
//! may consult computed style; remediation applies one uniform fix to every
//! issue the detector reported. Keeping the phases apart means nothing is
//! mutated while the tree is being scanned.

mod issue;
mod traits;

pub use issue::*;
pub use traits::*;
