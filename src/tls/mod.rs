//! TLS client setup for `https` probes.
//!
//! The probe inspects response headers, not server identity, so the connector
//! accepts any certificate chain. Handshake signatures are still checked
//! against the presented certificate so the session itself is well-formed.
//!
//! Uses `tokio-rustls` for async TLS connections over the `ring` provider.

use std::sync::Arc;

use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::{ring::default_provider, CryptoProvider};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, SignatureScheme};
use tokio_rustls::TlsConnector;

use crate::error_handling::{FetchError, InitializationError};

/// Certificate verifier that trusts every server certificate.
#[derive(Debug)]
struct AcceptAnyServerCert {
    provider: Arc<CryptoProvider>,
}

impl ServerCertVerifier for AcceptAnyServerCert {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls12_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls13_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}

/// Builds a TLS connector that performs no certificate validation.
///
/// The connector carries its own `ring` provider, so it does not depend on a
/// process-wide default being installed.
///
/// # Errors
///
/// Returns `InitializationError::TlsConfigError` if the provider does not support
/// the default protocol versions.
pub fn init_tls_connector() -> Result<TlsConnector, InitializationError> {
    let provider = Arc::new(default_provider());

    let config = ClientConfig::builder_with_provider(Arc::clone(&provider))
        .with_safe_default_protocol_versions()?
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyServerCert { provider }))
        .with_no_client_auth();

    Ok(TlsConnector::from(Arc::new(config)))
}

/// Converts a host into the server name sent in the TLS ClientHello.
pub(crate) fn server_name_for(host: &str) -> Result<ServerName<'static>, FetchError> {
    ServerName::try_from(host.to_string())
        .map_err(|e| FetchError::InvalidServerName(format!("{host}: {e}")))
}
