//! Error types for the request-line parser.

use thiserror::Error;

/// Errors that can occur while parsing a request line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The request contained no bytes, or only whitespace before the first line break.
    #[error("Empty request")]
    EmptyRequest,

    /// The request line is not valid UTF-8.
    #[error("Request line is not valid UTF-8")]
    InvalidEncoding,

    /// The request line does not have the `METHOD PATH [VERSION]` shape.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),
}
