//! Health check endpoint.
//!
//! Reports liveness together with a summary of the dashboard store, so a
//! monitoring probe can tell an idle server from one that is receiving data.

use crate::routes::method_not_allowed;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status (always "healthy" if reachable).
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of log lines held by the store.
    pub log_count: usize,
    /// Whether a metrics snapshot has been received.
    pub has_metrics: bool,
    /// Number of connected `/logs/stream` clients.
    pub stream_clients: usize,
}

/// Creates the health check routes.
pub fn health_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check).fallback(method_not_allowed))
        .with_state(state)
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "aethero-api",
        version: env!("CARGO_PKG_VERSION"),
        log_count: state.store().log_count(),
        has_metrics: state.store().metrics().is_some(),
        stream_clients: state.stream_subscriber_count(),
    })
}
