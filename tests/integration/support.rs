//! Shared test server serving scripted HTTP responses
//!
//! Each scripted response is served on its own accepted connection (every
//! response carries `connection: close`), and the raw request text is
//! captured so tests can assert on the exact headers that went over the
//! wire.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Raw requests captured by the scripted server, in arrival order
pub type CapturedRequests = Arc<Mutex<Vec<String>>>;

/// Bind a local listener and serve the given responses one per connection
pub async fn serve_script(responses: Vec<String>) -> (SocketAddr, CapturedRequests) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let captured: CapturedRequests = Arc::new(Mutex::new(Vec::new()));
    let requests = captured.clone();

    tokio::spawn(async move {
        for response in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };

            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                // GET requests carry no body; the header terminator ends them
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            requests
                .lock()
                .unwrap()
                .push(String::from_utf8_lossy(&buf).to_string());

            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (addr, captured)
}

/// 403 response carrying an SCA challenge token
pub fn forbidden_with_challenge(token: &str) -> String {
    format!(
        "HTTP/1.1 403 Forbidden\r\nx-2fa-approval: {token}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
    )
}

/// 200 response with a JSON body
pub fn ok_json(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        body.len(),
        body
    )
}

/// Arbitrary-status response with a plain text body
pub fn plain_status(status: u16, reason: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status} {reason}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        body.len(),
        body
    )
}

/// Extract a header value from a captured raw request, case-insensitively
pub fn header_value(request: &str, name: &str) -> Option<String> {
    request.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim()
            .eq_ignore_ascii_case(name)
            .then(|| value.trim().to_string())
    })
}

/// Generate an RSA key and write it as PKCS#8 PEM to a temp file
pub fn write_test_key() -> (rsa::RsaPrivateKey, tempfile::NamedTempFile) {
    use rsa::pkcs8::EncodePrivateKey;
    use std::io::Write;

    let key = rsa::RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("key generation");
    let pem = key.to_pkcs8_pem(rsa::pkcs8::LineEnding::LF).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(pem.as_bytes()).unwrap();

    (key, file)
}
