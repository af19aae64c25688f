//! Integration tests for health check and general API functionality.
//!
//! Tests cover:
//! - Health check endpoint
//! - Empty store behavior

use axum::http::StatusCode;

use super::common::{get, test_app};

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = test_app();

    let (status, response) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "healthy");
    assert_eq!(response["service"], "aethero-api");
}

#[tokio::test]
async fn test_empty_store_returns_empty_results() {
    let (app, _state) = test_app();

    // No logs yet
    let (status, response) = get(app.clone(), "/api/logs").await;
    assert_eq!(status, StatusCode::OK);
    assert!(response.as_array().unwrap().is_empty());

    // No metrics yet
    let (status, response) = get(app, "/api/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["error"], "no_metrics");
}
