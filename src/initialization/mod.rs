//! Application initialization.
//!
//! This module provides the process-wide setup performed by the binary before
//! a probe runs:
//! - Logger (plain or JSON format)
//! - Crypto provider for `rustls`

mod logger;

use rustls::crypto::{ring::default_provider, CryptoProvider};

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the crypto provider for TLS operations.
///
/// Configures the global crypto provider for `rustls`. Uses the `ring` provider,
/// which is also the one the TLS connector is built with.
pub fn init_crypto_provider() {
    // The return value is ignored because reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}
