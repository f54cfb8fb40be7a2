//! Rule protocol definitions.
//!
//! Rules are the mutation half of the pipeline: each one inspects the shared
//! document and rewrites attributes, styles or head content in place.

mod definition;
mod outcome;
mod traits;

pub use definition::*;
pub use outcome::*;
pub use traits::*;
