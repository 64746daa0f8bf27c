//! A minimal single-port HTTP status server.
//!
//! The server accepts one TCP connection at a time, reads a single request,
//! and answers with one of two canned responses:
//!
//! - any path starting with `/api` gets a JSON status document
//! - every other path gets a small HTML status page
//!
//! Every response is `HTTP/1.1 200 OK` with `Connection: close`.
//!
//! # Examples
//!
//! ## Classifying a request
//!
//! ```
//! use statusweb::{classify, Route};
//!
//! assert_eq!(classify(b"GET /api HTTP/1.1\r\n\r\n"), Route::ApiStatus);
//! assert_eq!(classify(b"GET /index.html HTTP/1.1\r\n\r\n"), Route::Root);
//!
//! // Anything unparseable falls back to the status page.
//! assert_eq!(classify(b"\n"), Route::Root);
//! ```
//!
//! ## Building a response
//!
//! ```
//! use statusweb::{Responder, ServerConfig};
//!
//! let responder = Responder::new(ServerConfig::default().addr.port());
//! let response = responder.respond(b"GET /api HTTP/1.1\r\n\r\n");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use statusweb::{HttpServer, ServerConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), statusweb::ServerError> {
//!     let server = HttpServer::bind_and_listen(ServerConfig::default())?;
//!     server.serve_forever().await;
//!     Ok(())
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{classify, parse_request_line, Error as ParserError, RequestLine, Route};
pub use server::{
    Error as ServerError, HttpResponse, HttpServer, Platform, Responder, ServerConfig,
    StatusCode, StatusSnapshot,
};
