//! HTTP request-line parsing and route classification.
//!
//! Only the first line of a request is ever inspected; headers and body are
//! ignored.

mod request;
mod route;
mod error;
mod tests;

// Re-export public items
pub use request::RequestLine;
pub use route::Route;
pub use error::Error;

// Re-export the parsing entry points
pub use request::{parse_request_line, request_path};
pub use route::classify;
