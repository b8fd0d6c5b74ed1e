//! Main application modules.
//!
//! This module provides the URL parsing used by the probe controller.

pub mod url;

// Re-export public API
pub use url::{parse_redirect_target, parse_url};
