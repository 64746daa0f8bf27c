//! Route selection.

use std::fmt;

use log::debug;

use crate::parser::request::request_path;

/// Path prefix that selects the JSON status endpoint.
pub const API_PREFIX: &str = "/api";

/// The two responses the server knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// The HTML status page. Served for every path outside `/api`.
    Root,
    /// The JSON status document.
    ApiStatus,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Root => write!(f, "root"),
            Route::ApiStatus => write!(f, "api-status"),
        }
    }
}

/// Decide which response a request should get.
///
/// The method is ignored and the path is matched by prefix, so
/// `POST /api/anything` and `GET /apifoo` both select [`Route::ApiStatus`].
/// The path is compared as raw bytes, so it need not be valid UTF-8.
/// A request with no path token selects [`Route::Root`].
pub fn classify(request: &[u8]) -> Route {
    match request_path(request) {
        Ok(path) if path.starts_with(API_PREFIX.as_bytes()) => Route::ApiStatus,
        Ok(_) => Route::Root,
        Err(e) => {
            debug!("Unparseable request line, serving root page: {e}");
            Route::Root
        }
    }
}
