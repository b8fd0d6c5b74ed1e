// Shared test helpers: canned HTTP servers and a dialer that routes test hosts
// to them.

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use rustls::crypto::ring::default_provider;
use rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::ServerConfig;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_rustls::TlsAcceptor;

use site_probe::{Dial, FetchError, RequestTarget};

/// A local server that answers each accepted connection with the next canned
/// response, then stops listening.
#[allow(dead_code)] // Used by other test files
pub struct CannedServer {
    pub addr: SocketAddr,
    pub requests: Arc<Mutex<Vec<Vec<u8>>>>,
    pub handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl CannedServer {
    /// Number of requests served so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    /// Raw bytes of the `index`-th request.
    pub fn request(&self, index: usize) -> Vec<u8> {
        self.requests.lock().expect("requests lock")[index].clone()
    }
}

/// Starts a server on `127.0.0.1:0` serving `responses` in order.
#[allow(dead_code)]
pub async fn start_canned_server(responses: Vec<Vec<u8>>) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);

    let handle = tokio::spawn(async move {
        for response in responses {
            let (mut sock, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };
            let request = read_request_head(&mut sock).await;
            recorded.lock().expect("requests lock").push(request);
            let _ = sock.write_all(&response).await;
            let _ = sock.shutdown().await;
        }
    });

    CannedServer {
        addr,
        requests,
        handle,
    }
}

/// Starts a TLS server on `127.0.0.1:0` with a freshly generated self-signed
/// certificate for `localhost`, answering one connection with `response`.
#[allow(dead_code)]
pub async fn start_tls_canned_server(response: Vec<u8>) -> CannedServer {
    let certified = rcgen::generate_simple_self_signed(vec!["localhost".to_string()])
        .expect("Failed to generate certificate");
    let cert_der = certified.cert.der().clone();
    let key_der = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(
        certified.key_pair.serialize_der(),
    ));

    let server_config = ServerConfig::builder_with_provider(Arc::new(default_provider()))
        .with_safe_default_protocol_versions()
        .expect("Failed to select protocol versions")
        .with_no_client_auth()
        .with_single_cert(vec![cert_der], key_der)
        .expect("Failed to build server config");
    let acceptor = TlsAcceptor::from(Arc::new(server_config));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);

    let handle = tokio::spawn(async move {
        let Ok((sock, _)) = listener.accept().await else {
            return;
        };
        let Ok(mut tls) = acceptor.accept(sock).await else {
            return;
        };
        let request = read_request_head(&mut tls).await;
        recorded.lock().expect("requests lock").push(request);
        let _ = tls.write_all(&response).await;
        let _ = tls.shutdown().await;
    });

    CannedServer {
        addr,
        requests,
        handle,
    }
}

/// Reads until the blank line ending the request header block.
async fn read_request_head<S: AsyncRead + Unpin>(sock: &mut S) -> Vec<u8> {
    let mut request = Vec::new();
    let mut chunk = [0u8; 256];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match sock.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&chunk[..n]),
        }
    }
    request
}

/// Dials plain TCP to a fixed address per host, recording every target.
#[allow(dead_code)]
#[derive(Default)]
pub struct LocalDialer {
    routes: HashMap<String, SocketAddr>,
    pub dialed: Mutex<Vec<RequestTarget>>,
}

#[allow(dead_code)]
impl LocalDialer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, host: &str, addr: SocketAddr) -> Self {
        self.routes.insert(host.to_string(), addr);
        self
    }

    pub fn dialed_targets(&self) -> Vec<RequestTarget> {
        self.dialed.lock().expect("dialed lock").clone()
    }
}

impl Dial for LocalDialer {
    type Stream = TcpStream;

    async fn dial(&self, target: &RequestTarget) -> Result<TcpStream, FetchError> {
        self.dialed
            .lock()
            .expect("dialed lock")
            .push(target.clone());

        let addr = *self
            .routes
            .get(&target.host)
            .ok_or_else(|| FetchError::Resolve {
                host: target.host.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "unknown test host"),
            })?;

        TcpStream::connect(addr)
            .await
            .map_err(|source| FetchError::Connect {
                host: target.host.clone(),
                port: addr.port(),
                source,
            })
    }
}
