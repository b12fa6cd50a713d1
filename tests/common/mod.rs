//! Shared utilities for integration tests.

use std::net::SocketAddr;

use edgefn::config::FunctionConfig;
use edgefn::http::HttpServer;
use tokio::net::TcpListener;

/// Start a server for the given config on an ephemeral port and return
/// the bound address.
pub async fn start_server(config: FunctionConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}
