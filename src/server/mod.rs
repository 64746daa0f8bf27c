//! HTTP server implementation for statusweb.
//!
//! This module provides the sequential accept loop and the responder that
//! turns a raw request into one of the two canned responses.

mod response;
mod config;
mod error;
mod snapshot;
mod responder;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use snapshot::{Platform, StatusSnapshot};
pub use responder::Responder;
pub use http_server::HttpServer;
