//! Request-line parsing and representation.

use std::fmt;

use crate::parser::error::Error;

/// The first line of an HTTP request.
///
/// The method and version are kept as raw tokens: nothing downstream
/// depends on them, so unknown methods or versions are not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The request method token (GET, POST, ...)
    pub method: String,
    /// The request target, including any query string
    pub path: String,
    /// The protocol version token, absent for `METHOD PATH` requests
    pub version: Option<String>,
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {} {version}", self.method, self.path),
            None => write!(f, "{} {}", self.method, self.path),
        }
    }
}

/// Parse the request line from the raw bytes of a request.
///
/// Only the bytes up to the first `\n` are decoded, so a request truncated
/// mid-header (or carrying non-UTF-8 header bytes) still parses as long as
/// its first line is intact.
///
/// # Arguments
///
/// * `input` - The raw request bytes as read from the connection
///
/// # Returns
///
/// The parsed request line, or an error if the first line is unusable
pub fn parse_request_line(input: &[u8]) -> Result<RequestLine, Error> {
    let line = std::str::from_utf8(first_line(input)).map_err(|_| Error::InvalidEncoding)?;
    let line = line.trim_end_matches('\r');

    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => Err(Error::EmptyRequest),
        [method, path] => Ok(RequestLine {
            method: method.to_string(),
            path: path.to_string(),
            version: None,
        }),
        [method, path, version] => Ok(RequestLine {
            method: method.to_string(),
            path: path.to_string(),
            version: Some(version.to_string()),
        }),
        _ => Err(Error::MalformedRequestLine(line.to_string())),
    }
}

/// Extract the raw path token from the request line.
///
/// Works on bytes, so the path may contain anything but ASCII whitespace,
/// and tokens after the path are ignored.
pub fn request_path(input: &[u8]) -> Result<&[u8], Error> {
    let line = first_line(input);
    let mut tokens = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty());

    match (tokens.next(), tokens.next()) {
        (Some(_), Some(path)) => Ok(path),
        (Some(_), None) => Err(Error::MalformedRequestLine(
            String::from_utf8_lossy(line).trim_end().to_string(),
        )),
        (None, _) => Err(Error::EmptyRequest),
    }
}

/// The bytes before the first `\n`.
fn first_line(input: &[u8]) -> &[u8] {
    match input.iter().position(|&b| b == b'\n') {
        Some(end) => &input[..end],
        None => input,
    }
}
