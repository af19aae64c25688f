//! Integration tests for the dashboard state endpoints.
//!
//! Tests cover:
//! - Submitting and listing log lines
//! - Replacing and reading metrics snapshots

use axum::http::StatusCode;
use serde_json::json;

use super::common::{get, post_json, put_json, test_app};

#[tokio::test]
async fn test_submitted_lines_listed_in_order() {
    let (app, state) = test_app();

    for line in ["a", "b", "a"] {
        let (status, _) = post_json(app.clone(), "/api/logs", json!({ "entry": line })).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, response) = get(app, "/api/logs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!(["a", "b", "a"]));
    assert_eq!(state.store().log_count(), 3);
}

#[tokio::test]
async fn test_lines_appended_directly_are_listed() {
    let (app, state) = test_app();
    state.store().append_log("from a producer");

    let (_, response) = get(app, "/api/logs").await;
    assert_eq!(response, json!(["from a producer"]));
}

#[tokio::test]
async fn test_metrics_last_write_wins() {
    let (app, _state) = test_app();

    let (status, _) = put_json(app.clone(), "/api/metrics", json!({"x": 1, "y": 2})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = put_json(app.clone(), "/api/metrics", json!({"x": 2})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = get(app, "/api/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!({"x": 2}));
}

#[tokio::test]
async fn test_invalid_metrics_keep_previous_snapshot() {
    let (app, _state) = test_app();

    put_json(app.clone(), "/api/metrics", json!({"accuracy": 0.95})).await;
    let (status, response) = put_json(app.clone(), "/api/metrics", json!("not an object")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "invalid_metrics");

    let (_, response) = get(app, "/api/metrics").await;
    assert_eq!(response, json!({"accuracy": 0.95}));
}
