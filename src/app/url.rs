//! URL parsing into request targets.
//!
//! Parsing is deliberately loose: there is no validation, no port handling
//! and no percent-decoding. Anything after the host's first `/` is the path.

use crate::fetch::{RequestTarget, Scheme};

/// Parses a user-supplied URL.
///
/// Splits on the first `://`. When the scheme or the remainder is empty
/// (including a missing separator) the scheme defaults to `https` and the
/// whole input is taken as host and path.
///
/// # Examples
///
/// ```
/// use site_probe::{parse_url, Scheme};
///
/// let target = parse_url("example.com/a/b");
/// assert_eq!(target.scheme, Scheme::Https);
/// assert_eq!(target.host, "example.com");
/// assert_eq!(target.path, "/a/b");
/// ```
pub fn parse_url(input: &str) -> RequestTarget {
    match input.split_once("://") {
        Some((scheme, host_path)) if !scheme.is_empty() && !host_path.is_empty() => {
            split_host_path(Scheme::from_token(scheme), host_path)
        }
        _ => split_host_path(Scheme::Https, input),
    }
}

/// Parses a `Location` header value.
///
/// Unlike [`parse_url`], no default scheme is applied: a value without
/// `://` is taken entirely as the scheme token and leaves the host empty.
pub fn parse_redirect_target(location: &str) -> RequestTarget {
    let (scheme, host_path) = location.split_once("://").unwrap_or((location, ""));
    split_host_path(Scheme::from_token(scheme), host_path)
}

fn split_host_path(scheme: Scheme, host_path: &str) -> RequestTarget {
    let (host, path) = host_path.split_once('/').unwrap_or((host_path, ""));
    RequestTarget::new(scheme, host, &format!("/{path}"))
}
