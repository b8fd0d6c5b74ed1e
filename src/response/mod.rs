//! Response interpreter.
//!
//! Recovers cookies, the redirect target and the authentication challenge
//! flag from the raw bytes of an HTTP response. Interpretation never fails:
//! a missing header/body separator yields an empty body, and invalid UTF-8
//! is replaced with U+FFFD.

mod cookies;
mod types;

use std::borrow::Cow;

use crate::config::{
    AUTH_CHALLENGE_MARKER, HEADER_BODY_SEPARATOR, HEADER_LINE_SEPARATOR, LOCATION_PREFIX,
    SET_COOKIE_PREFIX,
};
use crate::fetch::RawResponse;

pub use cookies::parse_cookie;
pub use types::{Cookie, Http2Support, ProbeResult};

/// Splits raw bytes at the first blank line and decodes both halves.
///
/// Without a `\r\n\r\n` separator the whole input is the header and the body
/// is empty.
pub fn split_response(raw: &[u8]) -> (Cow<'_, str>, Cow<'_, str>) {
    let (header, body) = match find_subslice(raw, HEADER_BODY_SEPARATOR) {
        Some(pos) => (&raw[..pos], &raw[pos + HEADER_BODY_SEPARATOR.len()..]),
        None => (raw, &raw[raw.len()..]),
    };
    (String::from_utf8_lossy(header), String::from_utf8_lossy(body))
}

/// Interprets `raw` as the response to a request sent to `host`.
pub fn interpret(raw: &RawResponse, host: &str) -> ProbeResult {
    let (header, _body) = split_response(raw.as_bytes());
    let mut result = ProbeResult::new(host);

    for line in header.split(HEADER_LINE_SEPARATOR) {
        if let Some(value) = strip_prefix_ignore_case(line, SET_COOKIE_PREFIX) {
            result.cookies.push(parse_cookie(value));
        } else if let Some(value) = strip_prefix_ignore_case(line, LOCATION_PREFIX) {
            result.redirect_target = Some(value.trim().to_string());
        } else if line.to_lowercase().contains(AUTH_CHALLENGE_MARKER) {
            result.auth_challenge = true;
        }
    }

    result
}

/// Returns the remainder of `line` after `prefix`, comparing ASCII case-insensitively.
pub(crate) fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpret_bytes(bytes: &[u8]) -> ProbeResult {
        interpret(&RawResponse::from(bytes), "example.com")
    }

    #[test]
    fn test_interpret_single_cookie_with_domain() {
        let result = interpret_bytes(
            b"HTTP/1.1 200 OK\r\nSet-Cookie: session=abc123; Domain=example.com\r\nConnection: close\r\n\r\n",
        );
        assert_eq!(
            result.cookies,
            vec![Cookie {
                name: "session".to_string(),
                expires: None,
                domain: Some("example.com".to_string()),
            }]
        );
        assert_eq!(result.redirect_target, None);
        assert!(!result.auth_challenge);
        assert_eq!(result.website, "example.com");
        assert_eq!(result.http2_support, Http2Support::Unknown);
    }

    #[test]
    fn test_interpret_cookie_with_expires_and_domain() {
        let result = interpret_bytes(
            b"HTTP/1.1 200 OK\r\nSet-Cookie: id=42; Expires=Wed, 01-Jan-2025; Domain=example.com\r\n\r\n",
        );
        assert_eq!(result.cookies.len(), 1);
        assert_eq!(result.cookies[0].name, "id");
        assert_eq!(result.cookies[0].expires.as_deref(), Some("Wed, 01-Jan-2025"));
        assert_eq!(result.cookies[0].domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_interpret_no_cookies() {
        let result = interpret_bytes(b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n<html>");
        assert!(result.cookies.is_empty());
    }

    #[test]
    fn test_interpret_cookies_keep_header_order() {
        let result = interpret_bytes(
            b"HTTP/1.1 200 OK\r\nSet-Cookie: b=2\r\nset-cookie: a=1\r\nSET-COOKIE: c=3\r\n\r\n",
        );
        let names: Vec<&str> = result.cookies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_interpret_auth_challenge_from_status_line() {
        let result = interpret_bytes(b"HTTP/1.1 401 Unauthorized\r\nWWW-Authenticate: Basic\r\n\r\n");
        assert!(result.auth_challenge);
    }

    #[test]
    fn test_interpret_auth_challenge_from_any_header_line() {
        let result = interpret_bytes(b"HTTP/1.1 200 OK\r\nX-Note: was 401 UNAUTHORIZED\r\n\r\n");
        assert!(result.auth_challenge);
    }

    #[test]
    fn test_interpret_auth_marker_in_body_is_ignored() {
        let result = interpret_bytes(b"HTTP/1.1 200 OK\r\n\r\n401 Unauthorized");
        assert!(!result.auth_challenge);
    }

    #[test]
    fn test_interpret_403_is_not_auth_challenge() {
        let result = interpret_bytes(b"HTTP/1.1 403 Forbidden\r\n\r\n");
        assert!(!result.auth_challenge);
    }

    #[test]
    fn test_interpret_cookie_line_never_sets_auth_challenge() {
        let result = interpret_bytes(b"HTTP/1.1 200 OK\r\nSet-Cookie: note=401 Unauthorized\r\n\r\n");
        assert!(!result.auth_challenge);
        assert_eq!(result.cookies.len(), 1);
    }

    #[test]
    fn test_interpret_location_trimmed_and_case_insensitive() {
        let result =
            interpret_bytes(b"HTTP/1.1 301 Moved\r\nlocation:   https://example.com/new  \r\n\r\n");
        assert_eq!(
            result.redirect_target.as_deref(),
            Some("https://example.com/new")
        );
    }

    #[test]
    fn test_interpret_last_location_wins() {
        let result = interpret_bytes(
            b"HTTP/1.1 302 Found\r\nLocation: http://a.example/\r\nLocation: http://b.example/\r\n\r\n",
        );
        assert_eq!(result.redirect_target.as_deref(), Some("http://b.example/"));
    }

    #[test]
    fn test_interpret_location_in_body_is_ignored() {
        let result = interpret_bytes(b"HTTP/1.1 200 OK\r\n\r\nLocation: http://nowhere/");
        assert_eq!(result.redirect_target, None);
    }

    #[test]
    fn test_interpret_without_separator_treats_all_as_header() {
        let raw = b"HTTP/1.1 302 Found\r\nLocation: https://example.com/next";
        let (header, body) = split_response(raw);
        assert_eq!(header, "HTTP/1.1 302 Found\r\nLocation: https://example.com/next");
        assert_eq!(body, "");

        let result = interpret_bytes(raw);
        assert_eq!(
            result.redirect_target.as_deref(),
            Some("https://example.com/next")
        );
    }

    #[test]
    fn test_split_response_at_first_separator_only() {
        let (header, body) = split_response(b"H: 1\r\n\r\nbody\r\n\r\nmore");
        assert_eq!(header, "H: 1");
        assert_eq!(body, "body\r\n\r\nmore");
    }

    #[test]
    fn test_interpret_invalid_utf8_is_replaced() {
        let raw = b"HTTP/1.1 200 OK\r\nSet-Cookie: caf\xff=1\r\n\r\n\xfe\xfd";
        let (_, body) = split_response(raw);
        assert_eq!(body, "\u{FFFD}\u{FFFD}");

        let result = interpret_bytes(raw);
        assert_eq!(result.cookies[0].name, "caf\u{FFFD}");
    }

    #[test]
    fn test_interpret_empty_input() {
        let result = interpret_bytes(b"");
        assert!(result.cookies.is_empty());
        assert!(!result.auth_challenge);
        assert_eq!(result.redirect_target, None);
    }

    #[test]
    fn test_interpret_is_repeatable() {
        let raw = RawResponse::from(
            &b"HTTP/1.1 401 Unauthorized\r\nSet-Cookie: a=1; Domain=x\r\nLocation: /y\r\n\r\n"[..],
        );
        assert_eq!(interpret(&raw, "x"), interpret(&raw, "x"));
    }

    #[test]
    fn test_strip_prefix_ignore_case_multibyte_line() {
        assert_eq!(strip_prefix_ignore_case("é", "location:"), None);
        assert_eq!(strip_prefix_ignore_case("Location:", "location:"), Some(""));
    }
}
