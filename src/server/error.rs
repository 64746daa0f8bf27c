//! Error types for the HTTP server.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can occur during HTTP server operation.
///
/// Only [`Error::Bind`] is fatal. Everything else ends the current
/// connection and the accept loop carries on.
#[derive(Debug, Error)]
pub enum Error {
    /// The listening socket could not be set up.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Accepting a client connection failed.
    #[error("Accept failed: {0}")]
    Accept(#[source] std::io::Error),

    /// Reading the request failed.
    #[error("Read failed: {0}")]
    Read(#[source] std::io::Error),

    /// The client closed the connection without sending anything.
    #[error("Client closed the connection without sending a request")]
    EmptyRead,

    /// Writing the response failed.
    #[error("Write failed: {0}")]
    Write(#[source] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
