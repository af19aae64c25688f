//! End-to-end tests for the client feeds against a live server.
//!
//! Tests cover:
//! - Pulling logs and fetching metrics into a client-side store
//! - The WebSocket push feed and its shutdown
//! - Submitting lines and requesting analyses through the client

use api::AppState;
use axum::{routing::get, Json, Router};
use serde_json::json;
use shared::client::{ClientError, DashboardClient};
use shared::models::MetricsSnapshot;
use shared::storage::DashboardStore;
use std::sync::Arc;
use std::time::Duration;

use super::common::{spawn_server, wait_until, TestServer};

async fn server_and_client() -> (TestServer, DashboardClient) {
    let server = spawn_server(AppState::with_in_memory_store()).await;
    let client = DashboardClient::new(&server.base_url).unwrap();
    (server, client)
}

/// Serves a fixed router on a loopback port and returns its base URL.
async fn serve_fixed(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn snapshot(value: serde_json::Value) -> MetricsSnapshot {
    MetricsSnapshot::try_from(value).unwrap()
}

#[tokio::test]
async fn test_pull_logs_appends_in_response_order() {
    let (server, client) = server_and_client().await;
    for line in ["first", "second", "third"] {
        server.state.store().append_log(line);
    }

    let local = DashboardStore::new();
    local.append_log("already here");
    let count = client.pull_logs(&local).await.unwrap();

    assert_eq!(count, 3);
    let logs = local.state().logs;
    assert_eq!(logs, vec!["already here", "first", "second", "third"]);
}

#[tokio::test]
async fn test_fetch_metrics_replaces_snapshot() {
    let (server, client) = server_and_client().await;
    let local = DashboardStore::new();

    server.state.store().replace_metrics(snapshot(json!({"x": 1})));
    client.fetch_metrics(&local).await.unwrap();
    server.state.store().replace_metrics(snapshot(json!({"x": 2})));
    client.fetch_metrics(&local).await.unwrap();

    assert_eq!(local.metrics(), Some(snapshot(json!({"x": 2}))));
}

#[tokio::test]
async fn test_fetch_metrics_without_snapshot_leaves_store_unchanged() {
    let (_server, client) = server_and_client().await;
    let local = DashboardStore::new();
    local.replace_metrics(snapshot(json!({"cached": true})));

    let err = client.fetch_metrics(&local).await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 404, .. }));
    assert_eq!(local.metrics(), Some(snapshot(json!({"cached": true}))));
}

#[tokio::test]
async fn test_pull_with_undecodable_body_appends_nothing() {
    let router = Router::new().route("/api/logs", get(|| async { Json(json!(["a", 1])) }));
    let client = DashboardClient::new(serve_fixed(router).await).unwrap();
    let local = DashboardStore::new();
    local.append_log("kept");

    let err = client.pull_logs(&local).await.unwrap_err();

    assert!(matches!(err, ClientError::Http(_)), "got {err:?}");
    assert_eq!(local.state().logs, vec!["kept"]);
}

#[tokio::test]
async fn test_fetch_non_object_metrics_keeps_previous_snapshot() {
    let router = Router::new().route("/api/metrics", get(|| async { Json(json!([1, 2])) }));
    let client = DashboardClient::new(serve_fixed(router).await).unwrap();
    let local = DashboardStore::new();
    local.replace_metrics(snapshot(json!({"accuracy": 0.9})));

    let err = client.fetch_metrics(&local).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidMetrics(_)), "got {err:?}");
    assert_eq!(local.metrics(), Some(snapshot(json!({"accuracy": 0.9}))));
}

#[tokio::test]
async fn test_stream_appends_lines_in_order_until_closed() {
    let (server, client) = server_and_client().await;
    let local = DashboardStore::new_shared();

    let stream = client.stream_logs(local.clone()).await.unwrap();
    wait_until(|| server.state.stream_subscriber_count() == 1).await;

    server.state.store().append_log("a");
    server.state.store().append_log("b");
    wait_until(|| local.log_count() == 2).await;

    assert_eq!(stream.close().await, Some(2));

    server.state.store().append_log("c");
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(local.state().logs, vec!["a", "b"]);
}

#[tokio::test]
async fn test_dropping_stream_disconnects_from_server() {
    let (server, client) = server_and_client().await;
    let local = DashboardStore::new_shared();

    let stream = client.stream_logs(local).await.unwrap();
    wait_until(|| server.state.stream_subscriber_count() == 1).await;

    drop(stream);
    wait_until(|| server.state.stream_subscriber_count() == 0).await;
}

#[tokio::test]
async fn test_submitted_lines_reach_stream_subscribers() {
    let (server, client) = server_and_client().await;
    let local = DashboardStore::new_shared();
    let stream = client.stream_logs(Arc::clone(&local)).await.unwrap();
    wait_until(|| server.state.stream_subscriber_count() == 1).await;

    let first = client.submit_log("boot complete").await.unwrap();
    let second = client.submit_log("agent online").await.unwrap();
    assert_eq!((first.index, second.index), (0, 1));

    wait_until(|| local.log_count() == 2).await;
    assert_eq!(local.state().logs, vec!["boot complete", "agent online"]);

    stream.close().await;
}

#[tokio::test]
async fn test_submit_blank_line_is_rejected() {
    let (server, client) = server_and_client().await;

    let err = client.submit_log("   ").await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 400, .. }));
    assert_eq!(server.state.store().log_count(), 0);
}

#[tokio::test]
async fn test_client_health_and_analysis() {
    let (_server, client) = server_and_client().await;

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "aethero-api");

    let analysis = client.analyze("Quiet day, lots of reading.").await.unwrap();
    assert_eq!(analysis.grok.mbti, "INFJ");
    assert_eq!(analysis.frontinus.dominant_emotion, "joy");
    assert!(!analysis.archivus.memory_links.is_empty());
}
