//! Transport fetcher.
//!
//! Sends one `GET` request over a freshly dialed connection and reads the raw
//! response until the peer closes. No parsing happens here.

mod dial;
mod request;

use std::io;

use log::debug;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};

use crate::config::READ_CHUNK_SIZE;
use crate::error_handling::FetchError;

pub use dial::{Dial, NetDialer, ProbeStream};
pub use request::{build_request, RequestTarget, Scheme};

/// Verbatim bytes received from the transport until end-of-stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse(Vec<u8>);

impl RawResponse {
    /// Returns the received bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes received.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the peer closed without sending anything.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for RawResponse {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for RawResponse {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Fetches `target` through `dialer`.
///
/// Writes the full request before reading, then reads until a zero-length
/// read. There is no read timeout: a peer that never closes blocks forever.
/// The connection is dropped on every return path.
///
/// # Errors
///
/// Returns the dialer's error when the host is unreachable, or
/// `FetchError::Io` if writing the request or reading the response fails.
pub async fn fetch<D: Dial>(dialer: &D, target: &RequestTarget) -> Result<RawResponse, FetchError> {
    let mut stream = dialer.dial(target).await?;

    let request = build_request(target);
    stream.write_all(request.as_bytes()).await?;
    stream.flush().await?;
    debug!("Sent {} request bytes to {}", request.len(), target.host);

    let response = read_to_close(&mut stream).await?;
    debug!("Received {} response bytes from {}", response.len(), target.host);

    if let Err(e) = stream.shutdown().await {
        debug!("Shutdown of connection to {} failed: {e}", target.host);
    }

    Ok(RawResponse(response))
}

/// Accumulates chunks in arrival order until end-of-stream.
///
/// A TLS peer that closes TCP without `close_notify` surfaces as
/// `UnexpectedEof`; that is treated as end-of-stream.
async fn read_to_close<R: AsyncRead + Unpin>(stream: &mut R) -> Result<Vec<u8>, FetchError> {
    let mut response = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        match stream.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => response.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("Peer closed without close_notify after {} bytes", response.len());
                break;
            }
            Err(e) => return Err(FetchError::Io(e)),
        }
    }

    Ok(response)
}
