//! Request dispatch and canned response construction.

use log::{debug, warn};
use serde::Serialize;

use crate::parser::{classify, Route};
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};
use crate::server::snapshot::{Platform, StatusSnapshot};

/// `server_info` object of the JSON status document.
#[derive(Debug, Serialize)]
struct ServerInfo {
    port: u16,
    platform: &'static str,
    os: &'static str,
    datetime: String,
    timestamp: i64,
    status: &'static str,
}

/// Top-level JSON status document.
#[derive(Debug, Serialize)]
struct ApiStatus {
    server_info: ServerInfo,
    message: &'static str,
}

/// Builds the response for each request.
///
/// The HTML page only depends on the port and platform, so it is rendered
/// once up front. The JSON document is rebuilt per request with a fresh
/// [`StatusSnapshot`].
#[derive(Debug, Clone)]
pub struct Responder {
    port: u16,
    platform: Platform,
    root_page: String,
}

impl Responder {
    /// Create a responder for a server listening on `port`.
    pub fn new(port: u16) -> Self {
        Self::with_platform(port, Platform::current())
    }

    /// Create a responder reporting an explicit platform.
    pub fn with_platform(port: u16, platform: Platform) -> Self {
        Self {
            port,
            platform,
            root_page: render_root_page(port, platform),
        }
    }

    /// The port reported in both bodies.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The platform reported in both bodies.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Classify the raw request and build the matching response.
    ///
    /// This never fails: if the JSON body cannot be produced the status page
    /// is served instead.
    pub fn respond(&self, request: &[u8]) -> HttpResponse {
        let route = classify(request);
        debug!("Routing request to {route}");

        match route {
            Route::Root => self.build_root_response(),
            Route::ApiStatus => self.build_api_response().unwrap_or_else(|e| {
                warn!("Failed to build API response, serving root page: {e}");
                self.build_root_response()
            }),
        }
    }

    /// Build the HTML status page response.
    pub fn build_root_response(&self) -> HttpResponse {
        HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/html")
            .with_connection_close()
            .with_body_string(self.root_page.as_str())
    }

    /// Build the JSON status response from the current time.
    pub fn build_api_response(&self) -> Result<HttpResponse, Error> {
        self.build_api_response_at(StatusSnapshot::capture())
    }

    /// Build the JSON status response for a given snapshot.
    pub fn build_api_response_at(&self, snapshot: StatusSnapshot) -> Result<HttpResponse, Error> {
        let document = ApiStatus {
            server_info: ServerInfo {
                port: self.port,
                platform: self.platform.label(),
                os: self.platform.os_name(),
                datetime: snapshot.datetime,
                timestamp: snapshot.timestamp,
                status: "running",
            },
            message: "Server API endpoint",
        };

        Ok(HttpResponse::new(StatusCode::Ok)
            .with_json(&document)?
            .with_connection_close())
    }
}

/// Render the status page.
///
/// The `browser` paragraph is filled in client-side by the inline script.
fn render_root_page(port: u16, platform: Platform) -> String {
    format!(
        "<!DOCTYPE html>\
         <html><body>\
         <h1>Hello, World!</h1>\
         <p>Server info:</p>\
         <ul>\
         <li>Port: {port}</li>\
         <li>Platform: {os}</li>\
         <li>API endpoint: <a href='/api'>/api</a></li>\
         </ul>\
         <h2>Browser Info</h2>\
         <p id='browser'></p>\
         <script>\
         document.getElementById('browser').innerHTML = \
         'User-Agent: ' + navigator.userAgent + '<br>' + \
         'Platform: ' + navigator.platform + '<br>' + \
         'Language: ' + navigator.language + '<br>' + \
         'Cookies enabled: ' + navigator.cookieEnabled;\
         </script>\
         </body></html>",
        port = port,
        os = platform.os_name(),
    )
}
