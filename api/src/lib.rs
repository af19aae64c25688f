//! Aethero API Server
//!
//! This crate provides the HTTP/WebSocket server for the Aethero dashboard.
//! It owns the server-side dashboard store, streams log lines to connected
//! clients, and exposes the crew and mind-analysis endpoints.
//!
//! # Architecture
//!
//! The API server is built on Axum and Tokio, providing:
//! - REST endpoints for reading and updating logs and metrics
//! - A WebSocket log stream fed by store subscriptions
//! - Crew management stubs and the agent orchestration endpoint
//!
//! # Example
//!
//! ```no_run
//! use api::run_server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     run_server().await
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod routes;
mod state;

pub use config::Config;
pub use state::AppState;

use anyhow::Result;
use axum::Router;
use shared::agents::MindOrchestrator;
use shared::storage::DashboardStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Runs the Aethero API server with configuration read from `AETHERO_*`
/// environment variables, until SIGTERM or Ctrl+C.
///
/// # Errors
///
/// Returns an error if the environment holds an invalid setting, or if
/// [`run_server_with_config`] fails.
pub async fn run_server() -> Result<()> {
    let config = Config::from_env()?;
    run_server_with_config(config).await
}

/// Runs the Aethero API server with an explicit configuration.
///
/// The server starts with an empty store and the canned analysis agents.
///
/// # Errors
///
/// Returns an error if the address cannot be resolved or bound, or if serving
/// fails.
pub async fn run_server_with_config(config: Config) -> Result<()> {
    let addr = config.socket_addr()?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        stream_capacity = config.stream_capacity,
        "Aethero API server starting"
    );

    let state = AppState::new(
        DashboardStore::new_shared(),
        MindOrchestrator::with_mock_agents(),
        config.stream_capacity,
    );
    let app = create_router_with_body_limit(state, config.max_body_bytes);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "Accepting dashboard connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Builds the router over `state` with the default body limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_body_limit(state, config::DEFAULT_MAX_BODY_BYTES)
}

/// Creates the application router, rejecting request bodies larger than
/// `max_body_bytes` with 413.
pub fn create_router_with_body_limit(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(routes::health_routes(state.clone()))
        .merge(routes::dashboard_routes(state.clone()))
        .merge(routes::analyze_routes(state))
        .merge(routes::crew_routes())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Waits for a shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
