//! Per-connection handler: drive one HTTP/1 connection to completion.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use hexrgb_config::ServerConfig;

use crate::routes::route;

/// Serve every request on `stream` until the client closes it.
pub async fn handle_connection(stream: TcpStream, addr: SocketAddr, config: Arc<ServerConfig>) {
    tracing::debug!(peer = %addr, "Client connected");

    let service = service_fn(move |req| {
        let config = Arc::clone(&config);
        async move { Ok::<_, Infallible>(route(req, &config).await) }
    });

    if let Err(e) = http1::Builder::new()
        .serve_connection(TokioIo::new(stream), service)
        .await
    {
        tracing::debug!(peer = %addr, error = %e, "Connection error");
    }

    tracing::debug!(peer = %addr, "Client disconnected");
}
