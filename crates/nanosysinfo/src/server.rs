//! HTTP server for nanosysinfo

use crate::probe::{LiveProbe, SystemProbe};
use crate::routes;
use anyhow::{Context, Result};
use axum::Router;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const DEFAULT_PORT: u16 = 8000;

/// Shared by all handlers. Holds no mutable state; each request reads the
/// machine afresh through the probe.
pub struct AppState {
    pub probe: Arc<dyn SystemProbe>,
}

impl AppState {
    pub fn new(probe: Arc<dyn SystemProbe>) -> Self {
        Self { probe }
    }

    pub fn live() -> Self {
        Self::new(Arc::new(LiveProbe))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::report_routes())
        .fallback(routes::not_found)
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped. Failing to bind is fatal.
pub async fn run(config: ServerConfig, state: AppState) -> Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
