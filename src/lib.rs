//! site_probe library: single-request HTTP/HTTPS probing
//!
//! This library sends one raw HTTP/1.1 `GET` to a URL, reads the full response
//! and reports the cookies it sets, whether it asks for authentication and
//! where it redirects. A redirect is followed exactly once.
//!
//! # Example
//!
//! ```no_run
//! use site_probe::{run_probe, Config, NetDialer};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dialer = NetDialer::new(&Config::default())?;
//! let report = run_probe(&dialer, "https://example.com/", &mut std::io::stdout()).await?;
//! if let Some(redirected) = report.redirected {
//!     println!("redirected to {}", redirected.website);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod probe;
mod response;
mod tls;

// Re-export public API
pub use app::{parse_redirect_target, parse_url};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, InitializationError, ProbeError};
pub use fetch::{build_request, fetch, Dial, NetDialer, ProbeStream, RawResponse, RequestTarget, Scheme};
pub use probe::{run_probe, ProbeReport};
pub use response::{interpret, parse_cookie, split_response, Cookie, Http2Support, ProbeResult};
pub use tls::init_tls_connector;
