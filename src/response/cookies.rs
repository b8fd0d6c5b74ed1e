//! `Set-Cookie` value parsing.

use crate::config::{DOMAIN_ATTRIBUTE, EXPIRES_ATTRIBUTE};
use crate::response::strip_prefix_ignore_case;
use crate::response::types::Cookie;

/// Parses the text following a `Set-Cookie:` label.
///
/// The name is the first `;` segment up to its first `=`. Of the remaining
/// attributes only `Expires` and `Domain` are kept; when repeated, the last
/// one wins.
pub fn parse_cookie(value: &str) -> Cookie {
    let mut segments = value.split(';');

    let first = segments.next().unwrap_or_default().trim();
    let name = first.split_once('=').map_or(first, |(name, _)| name);

    let mut cookie = Cookie {
        name: name.to_string(),
        ..Default::default()
    };

    for segment in segments {
        let attribute = segment.trim();
        if let Some(expires) = strip_prefix_ignore_case(attribute, EXPIRES_ATTRIBUTE) {
            cookie.expires = Some(expires.to_string());
        } else if let Some(domain) = strip_prefix_ignore_case(attribute, DOMAIN_ATTRIBUTE) {
            cookie.domain = Some(domain.to_string());
        }
    }

    cookie
}
