//! Shared utilities for integration testing.

use std::net::SocketAddr;

use auth_gateway::{GatewayConfig, HttpServer, Shutdown};
use tokio::net::TcpListener;

/// Bind an ephemeral port and spawn a gateway on it.
///
/// The listener is bound before the server task is spawned, so requests
/// can be issued immediately.
pub async fn spawn_gateway(mut config: GatewayConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Client with a cookie store, so session and XSRF cookies round-trip.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .no_proxy()
        .build()
        .unwrap()
}

/// Pull a cookie value out of a response by name.
#[allow(dead_code)]
pub fn response_cookie(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}
