//! Dashboard state endpoints.
//!
//! Exposes the server-side store to dashboard clients:
//!
//! - `GET /api/logs` - all log lines in append order
//! - `POST /api/logs` - append a single line (console command submission)
//! - `GET /api/metrics` - the latest metrics snapshot
//! - `PUT /api/metrics` - replace the metrics snapshot
//! - `GET /logs/stream` - WebSocket pushing every line appended after connect

use crate::routes::method_not_allowed;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::JsonRejection,
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use shared::models::{LogEntry, MetricsSnapshot};
use tokio::sync::broadcast::{self, error::RecvError};
use validator::Validate;

/// Request body for submitting a log line.
#[derive(Debug, Deserialize, Validate)]
pub struct LogSubmitRequest {
    /// The line to append.
    #[validate(length(max = 16384, message = "Log entry cannot exceed 16384 characters"))]
    pub entry: String,
}

/// Response for an accepted log line.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogSubmitResponse {
    /// Number of lines accepted (always 1).
    pub accepted: usize,
    /// Index the line was stored at.
    pub index: usize,
}

/// Response for a replaced metrics snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsReplaceResponse {
    /// Success indicator.
    pub success: bool,
}

/// Error response for dashboard endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardError {
    /// Error type.
    pub error: String,
    /// Detailed error message.
    pub message: String,
}

impl DashboardError {
    fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

type ErrorReply = (StatusCode, Json<DashboardError>);

/// Creates the dashboard state routes.
pub fn dashboard_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/logs",
            get(list_logs).post(submit_log).fallback(method_not_allowed),
        )
        .route(
            "/api/metrics",
            get(get_metrics)
                .put(replace_metrics)
                .fallback(method_not_allowed),
        )
        .route(
            "/logs/stream",
            get(stream_logs).fallback(method_not_allowed),
        )
        .with_state(state)
}

/// Handler for GET /api/logs.
async fn list_logs(State(state): State<AppState>) -> Json<Vec<LogEntry>> {
    Json(state.store().state().logs)
}

/// Handler for POST /api/logs.
///
/// Returns 201 Created on success, 400 Bad Request for blank or malformed input.
async fn submit_log(
    State(state): State<AppState>,
    payload: Result<Json<LogSubmitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LogSubmitResponse>), ErrorReply> {
    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(DashboardError::new("invalid_json", rejection.body_text())),
        )
    })?;

    if request.entry.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(DashboardError::new("empty_entry", "Log entry cannot be empty")),
        ));
    }

    request.validate().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(DashboardError::new("validation_failed", e.to_string())),
        )
    })?;

    let index = state.store().append_log(request.entry);
    tracing::debug!(index, "Accepted submitted log entry");

    Ok((
        StatusCode::CREATED,
        Json(LogSubmitResponse { accepted: 1, index }),
    ))
}

/// Handler for GET /api/metrics.
///
/// Returns 404 until a snapshot has been stored.
async fn get_metrics(State(state): State<AppState>) -> Response {
    match state.store().metrics() {
        Some(snapshot) => Json(snapshot).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(DashboardError::new(
                "no_metrics",
                "No metrics snapshot has been received yet",
            )),
        )
            .into_response(),
    }
}

/// Handler for PUT /api/metrics.
///
/// The body must be a JSON object; it replaces the previous snapshot wholesale.
async fn replace_metrics(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<MetricsReplaceResponse>, ErrorReply> {
    let Json(body) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(DashboardError::new("invalid_json", rejection.body_text())),
        )
    })?;

    let snapshot = MetricsSnapshot::try_from(body).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(DashboardError::new("invalid_metrics", e.to_string())),
        )
    })?;

    state.store().replace_metrics(snapshot);
    tracing::debug!("Metrics snapshot replaced");

    Ok(Json(MetricsReplaceResponse { success: true }))
}

/// Handler for GET /logs/stream.
///
/// Subscribes before the upgrade completes, so every line appended after the
/// handshake reaches the client.
async fn stream_logs(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    let rx = state.subscribe_logs();
    ws.on_upgrade(move |socket| stream_connection(socket, rx))
}

async fn stream_connection(mut socket: WebSocket, mut rx: broadcast::Receiver<LogEntry>) {
    tracing::info!("Log stream client connected");
    let mut sent = 0usize;

    loop {
        tokio::select! {
            line = rx.recv() => match line {
                Ok(entry) => {
                    if socket
                        .send(Message::Text(entry.into_inner().into()))
                        .await
                        .is_err()
                    {
                        break;
                    }
                    sent += 1;
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Log stream client lagging, lines skipped");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    tracing::info!(sent, "Log stream client disconnected");
}
