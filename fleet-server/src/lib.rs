//! Fleet Server - HTTP API for the fleet dashboard
//!
//! This crate provides the web backend:
//! - Health check
//! - Full dataset listing
//! - Per-fleet summary
//! - Single fleet lookup
//!
//! All responses are JSON and cross-origin requests are allowed from anywhere.

mod error;
mod routes;

use axum::{http::Uri, routing::get, Router};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// Create the router with all routes
pub fn create_router() -> Router {
    Router::new()
        // Health check
        .route("/", get(routes::status::status_handler))
        // Fleet data API
        .route("/api/fleet-data", get(routes::fleet::get_fleet_data))
        .route("/api/fleet-summary", get(routes::fleet::get_fleet_summary))
        .route("/api/fleet/{fleet_id}", get(routes::fleet::get_single_fleet))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NoRoute(uri.path().to_string())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr();
    let router = create_router();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Fleet Dashboard API listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
