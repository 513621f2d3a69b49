pub mod handlers;
mod service;
pub mod types;

use crate::{Result, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router.
///
/// `/hello` is the backend contract with the structured errors array;
/// `/api/hello` is the edge-layer variant that reports only the first
/// message. Both run the same shared validation rule. CORS is permissive
/// because the form is expected to be served from a different origin.
pub fn app() -> Router {
    Router::new()
        .route("/hello", post(handlers::hello))
        .route("/api/hello", post(handlers::edge_hello))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    let app = app();

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
