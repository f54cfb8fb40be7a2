//! Local file document source for wcagfix.

mod file;

pub use file::FileSource;
