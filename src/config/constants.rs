//! Configuration constants.
//!
//! Ports, wire-level literals and the fixed messages printed by the binary.

/// Default port for plain `http` targets.
pub const HTTP_PORT: u16 = 80;
/// Default port for `https` targets.
pub const HTTPS_PORT: u16 = 443;

/// Size of each read from the transport before appending to the response buffer.
pub const READ_CHUNK_SIZE: usize = 1024;

/// Separator between the response header block and the body.
pub const HEADER_BODY_SEPARATOR: &[u8] = b"\r\n\r\n";
/// Line terminator inside the header block.
pub const HEADER_LINE_SEPARATOR: &str = "\r\n";

// Prefixes matched case-insensitively by the response interpreter
/// Header carrying one cookie.
pub const SET_COOKIE_PREFIX: &str = "set-cookie:";
/// Header carrying the redirect target.
pub const LOCATION_PREFIX: &str = "location:";
/// Cookie attribute holding the raw expiry date.
pub const EXPIRES_ATTRIBUTE: &str = "expires=";
/// Cookie attribute holding the cookie domain.
pub const DOMAIN_ATTRIBUTE: &str = "domain=";

/// Substring that marks a response as password-protected, matched on lowercased lines.
pub const AUTH_CHALLENGE_MARKER: &str = "401 unauthorized";

/// Printed before the second probe cycle.
pub const FOLLOWING_REDIRECT_MESSAGE: &str = "Following redirect...";

/// Printed on stdout when no URL argument is given.
pub const USAGE_MESSAGE: &str = "Usage: site_probe <url>";

/// Printed when the host cannot be resolved or refuses the connection.
pub const CONNECTION_FAILURE_MESSAGE: &str = "Unable to connect to the host.";
