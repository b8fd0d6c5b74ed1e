//! Request targets and request construction.

use std::fmt;

use log::warn;

/// URL scheme of a probe target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Plain TCP
    Http,
    /// TLS over TCP
    Https,
}

impl Scheme {
    /// Maps a scheme token to a `Scheme`.
    ///
    /// Only the exact token `https` is `Https`; every other token, including
    /// `HTTPS` or an empty or garbled one, is dialed as plain `Http`.
    pub fn from_token(token: &str) -> Self {
        if token == "https" {
            Scheme::Https
        } else {
            if token != "http" {
                warn!("Unrecognized scheme {token:?}, probing over plain http");
            }
            Scheme::Http
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

/// Where a single probe request goes.
///
/// `path` always begins with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    /// Selects the port and whether TLS is negotiated
    pub scheme: Scheme,
    /// Host sent in the `Host` header and dialed
    pub host: String,
    /// Request path, including any query
    pub path: String,
}

impl RequestTarget {
    /// Creates a target, normalizing the path to start with `/`.
    pub fn new(scheme: Scheme, host: impl Into<String>, path: &str) -> Self {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self {
            scheme,
            host: host.into(),
            path,
        }
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)
    }
}

/// Builds the HTTP/1.1 request header block sent for `target`.
pub fn build_request(target: &RequestTarget) -> String {
    format!(
        "GET {} HTTP/1.1\r\n\
         Host: {}\r\n\
         Connection: close\r\n\
         \r\n",
        target.path, target.host
    )
}
