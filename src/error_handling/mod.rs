//! Error handling.
//!
//! This module provides the typed errors returned by the library:
//! - `FetchError` for transport failures (DNS, connect, TLS, I/O)
//! - `InitializationError` for logger and TLS setup failures
//! - `ProbeError` for a whole probe run (fetch or output failure)
//!
//! Malformed responses are never errors; the response interpreter degrades
//! gracefully instead.

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError, ProbeError};
