//! Shared utilities for integration tests.

use std::net::SocketAddr;

use axum::Router;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Serve `app` on an ephemeral local port with peer address info enabled.
pub async fn start_app(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
            .await
            .unwrap();
    });

    addr
}

/// Send a raw HTTP/1.1 GET and return the response body.
pub async fn raw_get(addr: SocketAddr, path: &str, headers: &[(&str, &str)]) -> String {
    let mut socket = TcpStream::connect(addr).await.unwrap();

    let mut request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (name, value) in headers {
        request.push_str(&format!("{name}: {value}\r\n"));
    }
    request.push_str("\r\n");
    socket.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    socket.read_to_string(&mut response).await.unwrap();

    let (head, body) = response.split_once("\r\n\r\n").unwrap();
    assert!(head.starts_with("HTTP/1.1 200"), "unexpected response: {head}");
    body.to_string()
}
