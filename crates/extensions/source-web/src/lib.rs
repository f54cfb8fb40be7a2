//! HTTP/S document source for wcagfix.

mod http;

pub use http::{HttpSource, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
