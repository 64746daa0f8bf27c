//! Tests for request-line parsing and classification.

#[cfg(test)]
mod tests {
    use crate::parser::{classify, parse_request_line, request_path, Error, RequestLine, Route};

    #[test]
    fn test_parse_simple_get_request() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request_line(request).unwrap();
        assert_eq!(result.method, "GET");
        assert_eq!(result.path, "/index.html");
        assert_eq!(result.version.as_deref(), Some("HTTP/1.1"));
    }

    #[test]
    fn test_parse_request_without_version() {
        let result = parse_request_line(b"GET /api\r\n").unwrap();
        assert_eq!(result.path, "/api");
        assert_eq!(result.version, None);
    }

    #[test]
    fn test_parse_request_without_line_break() {
        let result = parse_request_line(b"GET /status HTTP/1.0").unwrap();
        assert_eq!(result.path, "/status");
        assert_eq!(result.version.as_deref(), Some("HTTP/1.0"));
    }

    #[test]
    fn test_unknown_method_is_kept() {
        let result = parse_request_line(b"BREW /pot HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(result.method, "BREW");
        assert_eq!(result.path, "/pot");
    }

    #[test]
    fn test_request_line_with_extra_whitespace() {
        let result = parse_request_line(b"GET  /index.html  HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(result.method, "GET");
        assert_eq!(result.path, "/index.html");
        assert_eq!(result.version.as_deref(), Some("HTTP/1.1"));
    }

    #[test]
    fn test_empty_request() {
        assert_eq!(parse_request_line(b""), Err(Error::EmptyRequest));
        assert_eq!(parse_request_line(b"\n"), Err(Error::EmptyRequest));
        assert_eq!(parse_request_line(b"  \r\nHost: x\r\n"), Err(Error::EmptyRequest));
    }

    #[test]
    fn test_incomplete_request_line() {
        let result = parse_request_line(b"GET\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(ref line)) if line == "GET"));
    }

    #[test]
    fn test_too_many_tokens() {
        let result = parse_request_line(b"GET /a b HTTP/1.1\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_invalid_utf8_request_line() {
        let result = parse_request_line(b"GET /\xff\xfe HTTP/1.1\r\n\r\n");
        assert_eq!(result, Err(Error::InvalidEncoding));
    }

    #[test]
    fn test_invalid_utf8_after_first_line_is_ignored() {
        let result = parse_request_line(b"GET /api HTTP/1.1\r\nX-Bin: \xff\xfe\r\n\r\n").unwrap();
        assert_eq!(result.path, "/api");
    }

    #[test]
    fn test_request_line_display() {
        let line = RequestLine {
            method: "GET".to_string(),
            path: "/".to_string(),
            version: Some("HTTP/1.1".to_string()),
        };
        assert_eq!(line.to_string(), "GET / HTTP/1.1");

        let line = RequestLine { version: None, ..line };
        assert_eq!(line.to_string(), "GET /");
    }

    #[test]
    fn test_classify_api() {
        assert_eq!(classify(b"GET /api HTTP/1.1\r\n\r\n"), Route::ApiStatus);
        assert_eq!(classify(b"GET /api/status HTTP/1.1\r\n\r\n"), Route::ApiStatus);
        assert_eq!(classify(b"GET /api?x=1 HTTP/1.1\r\n\r\n"), Route::ApiStatus);
    }

    #[test]
    fn test_classify_is_prefix_based() {
        assert_eq!(classify(b"GET /apifoo HTTP/1.1\r\n\r\n"), Route::ApiStatus);
    }

    #[test]
    fn test_classify_ignores_method() {
        assert_eq!(classify(b"POST /api HTTP/1.1\r\n\r\n"), Route::ApiStatus);
        assert_eq!(classify(b"DELETE /api HTTP/1.1\r\n\r\n"), Route::ApiStatus);
    }

    #[test]
    fn test_classify_root() {
        assert_eq!(classify(b"GET / HTTP/1.1\r\n\r\n"), Route::Root);
        assert_eq!(classify(b"GET /index.html HTTP/1.1\r\n\r\n"), Route::Root);
        assert_eq!(classify(b"GET /ap HTTP/1.1\r\n\r\n"), Route::Root);
        assert_eq!(classify(b"GET /v1/api HTTP/1.1\r\n\r\n"), Route::Root);
        assert_eq!(classify(b"GET /API HTTP/1.1\r\n\r\n"), Route::Root);
    }

    #[test]
    fn test_classify_malformed_defaults_to_root() {
        assert_eq!(classify(b""), Route::Root);
        assert_eq!(classify(b"\n"), Route::Root);
        assert_eq!(classify(b"/api\r\n"), Route::Root);
        assert_eq!(classify(b"GET /\xff HTTP/1.1\r\n"), Route::Root);
    }

    #[test]
    fn test_request_path_is_raw_bytes() {
        assert_eq!(request_path(b"GET /caf\xe9 HTTP/1.1\r\n\r\n"), Ok(&b"/caf\xe9"[..]));
        assert_eq!(request_path(b"GET\t/tabbed HTTP/1.1\r\n"), Ok(&b"/tabbed"[..]));
        assert_eq!(request_path(b"GET /a b HTTP/1.1\r\n"), Ok(&b"/a"[..]));
    }

    #[test]
    fn test_request_path_errors() {
        assert_eq!(request_path(b""), Err(Error::EmptyRequest));
        assert_eq!(request_path(b"\r\n"), Err(Error::EmptyRequest));
        assert!(matches!(
            request_path(b"GET\r\n"),
            Err(Error::MalformedRequestLine(ref line)) if line == "GET"
        ));
    }

    #[test]
    fn test_classify_api_path_with_non_utf8_bytes() {
        assert_eq!(classify(b"GET /api/caf\xe9 HTTP/1.1\r\n\r\n"), Route::ApiStatus);
        assert_eq!(classify(b"GET /api\xff\xfe HTTP/1.1\r\n\r\n"), Route::ApiStatus);
    }

    #[test]
    fn test_classify_ignores_tokens_after_path() {
        assert_eq!(classify(b"GET /api HTTP/1.1 x\r\n\r\n"), Route::ApiStatus);
        assert_eq!(classify(b"GET / HTTP/1.1 x\r\n\r\n"), Route::Root);
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Route::Root.to_string(), "root");
        assert_eq!(Route::ApiStatus.to_string(), "api-status");
    }
}
