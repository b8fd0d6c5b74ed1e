//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error building the TLS client configuration.
    #[error("TLS configuration error: {0}")]
    TlsConfigError(#[from] rustls::Error),
}

/// Error types for the transport fetcher.
///
/// `Resolve` and `Connect` are the terminal connection failures of a probe;
/// the rest are failures after a connection was established.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The host name could not be resolved to any address.
    #[error("Failed to resolve host {host}: {source}")]
    Resolve {
        /// Host that failed to resolve
        host: String,
        /// Resolver error
        #[source]
        source: std::io::Error,
    },

    /// Every resolved address refused or failed the TCP connection.
    #[error("Failed to connect to {host}:{port}: {source}")]
    Connect {
        /// Host dialed
        host: String,
        /// Port dialed
        port: u16,
        /// Last connect error
        #[source]
        source: std::io::Error,
    },

    /// The host is not usable as a TLS server name.
    #[error("Invalid TLS server name: {0}")]
    InvalidServerName(String),

    /// The TLS handshake failed.
    #[error("TLS connection failed for {host}: {source}")]
    Tls {
        /// Host of the failed handshake
        host: String,
        /// Handshake error
        #[source]
        source: std::io::Error,
    },

    /// Writing the request or reading the response failed.
    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Returns true when the host could not be resolved or refused the connection.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, FetchError::Resolve { .. } | FetchError::Connect { .. })
    }
}

/// Error types for a probe run.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// A fetch cycle failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing the report to the output failed.
    #[error("Failed to write probe output: {0}")]
    Output(#[source] std::io::Error),
}

impl ProbeError {
    /// Returns true when the failure is an unreachable host.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, ProbeError::Fetch(e) if e.is_connection_error())
    }
}
