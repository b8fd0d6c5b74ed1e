//! Transport connection establishment.
//!
//! `Dial` is the seam between the fetcher and the network. `NetDialer` resolves
//! the host, connects over TCP and, for `https`, negotiates TLS.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use log::{debug, info};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{lookup_host, TcpStream};
use tokio_rustls::TlsConnector;

use crate::config::Config;
use crate::error_handling::{FetchError, InitializationError};
use crate::fetch::request::{RequestTarget, Scheme};
use crate::tls::{init_tls_connector, server_name_for};

/// A bidirectional byte stream carrying one probe exchange.
pub trait ProbeStream: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> ProbeStream for T {}

/// Opens a connection for a request target.
pub trait Dial {
    /// Stream produced for each successful dial.
    type Stream: ProbeStream;

    /// Connects to `target`.
    ///
    /// Fails with `FetchError::Resolve` or `FetchError::Connect` when the host
    /// cannot be reached at all.
    fn dial(
        &self,
        target: &RequestTarget,
    ) -> impl Future<Output = Result<Self::Stream, FetchError>> + Send;
}

/// Dials real hosts over TCP, with TLS for `https` targets.
#[derive(Clone)]
pub struct NetDialer {
    http_port: u16,
    https_port: u16,
    tls: TlsConnector,
}

impl NetDialer {
    /// Creates a dialer using the ports from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS client configuration cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self {
            http_port: config.http_port,
            https_port: config.https_port,
            tls: init_tls_connector()?,
        })
    }

    /// Port dialed for `scheme`.
    pub fn port_for(&self, scheme: Scheme) -> u16 {
        match scheme {
            Scheme::Http => self.http_port,
            Scheme::Https => self.https_port,
        }
    }
}

impl Dial for NetDialer {
    type Stream = Box<dyn ProbeStream>;

    async fn dial(&self, target: &RequestTarget) -> Result<Self::Stream, FetchError> {
        let port = self.port_for(target.scheme);
        info!("Connecting to {}:{} ({})", target.host, port, target.scheme);
        let sock = connect_tcp(&target.host, port).await?;

        match target.scheme {
            Scheme::Http => Ok(Box::new(sock)),
            Scheme::Https => {
                let server_name = server_name_for(&target.host)?;
                let tls_stream = self
                    .tls
                    .connect(server_name, sock)
                    .await
                    .map_err(|source| FetchError::Tls {
                        host: target.host.clone(),
                        source,
                    })?;
                debug!(
                    "TLS session established with {} ({:?})",
                    target.host,
                    tls_stream.get_ref().1.protocol_version()
                );
                Ok(Box::new(tls_stream))
            }
        }
    }
}

/// Resolves `host` and connects to the first address that accepts.
async fn connect_tcp(host: &str, port: u16) -> Result<TcpStream, FetchError> {
    let addrs: Vec<SocketAddr> = lookup_host((host, port))
        .await
        .map_err(|source| FetchError::Resolve {
            host: host.to_string(),
            source,
        })?
        .collect();

    if addrs.is_empty() {
        return Err(FetchError::Resolve {
            host: host.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no addresses returned"),
        });
    }

    let mut last_error = None;
    for addr in addrs {
        match TcpStream::connect(addr).await {
            Ok(sock) => return Ok(sock),
            Err(e) => {
                debug!("Connection to {addr} failed: {e}");
                last_error = Some(e);
            }
        }
    }

    Err(FetchError::Connect {
        host: host.to_string(),
        port,
        source: last_error
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "no address tried")),
    })
}
