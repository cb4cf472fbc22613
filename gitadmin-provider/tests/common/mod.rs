//! 共享测试工具：一次性本地 HTTP 应答器

#![allow(dead_code, clippy::expect_used)]

use std::time::Duration;

use gitadmin_provider::{ClientOptions, GithubUserService};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Canned response served once by [`serve_once`].
pub struct CannedResponse {
    pub status: u16,
    pub reason: &'static str,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            reason: "OK",
            body: body.into(),
        }
    }

    pub fn status(status: u16, reason: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            reason,
            body: body.into(),
        }
    }
}

/// Accept one connection, answer it with `response`, and hand back the raw
/// request head that was received.
pub async fn serve_once(response: CannedResponse) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let head = read_request_head(&mut socket).await;

        let raw = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response.status,
            response.reason,
            response.body.len(),
            response.body
        );
        socket.write_all(raw.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
        head
    });

    (format!("http://{addr}"), handle)
}

/// Accept one connection and never answer it.
pub async fn serve_silently(hold_for: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(hold_for).await;
            drop(socket);
        }
    });
    format!("http://{addr}")
}

/// An address nothing listens on.
pub async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn service_for(base_url: &str, request_timeout: Duration) -> GithubUserService {
    GithubUserService::new(ClientOptions {
        base_url: base_url.to_string(),
        access_token: Some("test-token".to_string()),
        connect_timeout: Duration::from_secs(2),
        request_timeout,
        ..ClientOptions::default()
    })
    .expect("build service")
}

async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.expect("read");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
