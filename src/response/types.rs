//! Probe result model and its printed form.

use std::fmt;

/// HTTP/2 support as reported by the probe.
///
/// Only HTTP/1.1 is ever spoken, so support is never detected and always
/// renders as `no`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Http2Support {
    /// Not detected
    #[default]
    Unknown,
}

impl fmt::Display for Http2Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Http2Support::Unknown => write!(f, "no"),
        }
    }
}

/// One `Set-Cookie` header line.
///
/// `expires` is the raw attribute text; it is not parsed as a date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookie {
    /// Text before the first `=` of the first segment
    pub name: String,
    /// Value of the `Expires` attribute
    pub expires: Option<String>,
    /// Value of the `Domain` attribute
    pub domain: Option<String>,
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cookie name: {}", self.name)?;
        if let Some(expires) = self.expires.as_deref().filter(|v| !v.is_empty()) {
            write!(f, ", expires time: {expires}")?;
        }
        if let Some(domain) = self.domain.as_deref().filter(|v| !v.is_empty()) {
            write!(f, ", domain name: {domain}")?;
        }
        Ok(())
    }
}

/// Facts recovered from one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Host the request was sent to
    pub website: String,
    /// Always `Unknown`
    pub http2_support: Http2Support,
    /// Cookies in header order
    pub cookies: Vec<Cookie>,
    /// Whether any header line mentioned `401 Unauthorized`
    pub auth_challenge: bool,
    /// Trimmed value of the last `Location` header
    pub redirect_target: Option<String>,
}

impl ProbeResult {
    /// An empty result for `website`.
    pub fn new(website: impl Into<String>) -> Self {
        Self {
            website: website.into(),
            http2_support: Http2Support::Unknown,
            cookies: Vec::new(),
            auth_challenge: false,
            redirect_target: None,
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "website: {}", self.website)?;
        writeln!(f, "1. Supports http2: {}", self.http2_support)?;
        writeln!(f, "2. List of Cookies:")?;
        for cookie in &self.cookies {
            writeln!(f, "{cookie}")?;
        }
        writeln!(
            f,
            "3. Password-protected: {}",
            if self.auth_challenge { "yes" } else { "no" }
        )
    }
}
