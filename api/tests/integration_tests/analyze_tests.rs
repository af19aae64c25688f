//! Integration tests for the mind analysis endpoint.
//!
//! Tests cover:
//! - Successful orchestration with the canned agents
//! - Input validation
//! - Agent failure surfacing as 500

use api::{create_router, AppState};
use axum::http::StatusCode;
use serde_json::json;
use shared::agents::{
    Agent, AgentError, AgentFuture, FrontinusAgent, GrokAgent, MindOrchestrator,
};
use shared::models::ArchivusReport;
use shared::storage::DashboardStore;
use std::sync::Arc;

use super::common::{get, post_json, test_app};

struct BrokenArchive;

impl Agent<ArchivusReport> for BrokenArchive {
    fn name(&self) -> &'static str {
        "archivus"
    }

    fn analyze<'a>(&'a self, _text: &'a str) -> AgentFuture<'a, ArchivusReport> {
        Box::pin(async { Err(AgentError::new("archivus", "memory store unreachable")) })
    }
}

#[tokio::test]
async fn test_analyze_returns_all_three_reports() {
    let (app, _state) = test_app();

    let (status, response) = post_json(
        app,
        "/api/analyze-mind",
        json!({"introspection": "I spent the evening thinking about purpose."}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    for key in ["grok", "archivus", "frontinus", "timestamp"] {
        assert!(response["data"].get(key).is_some(), "missing {key}");
    }
}

#[tokio::test]
async fn test_analyze_rejects_missing_text() {
    let (app, _state) = test_app();

    let (status, response) = post_json(app, "/api/analyze-mind", json!({"text": "wrong field"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Missing or invalid introspection text");
}

#[tokio::test]
async fn test_analyze_rejects_get() {
    let (app, _state) = test_app();

    let (status, response) = get(app, "/api/analyze-mind").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response["error"], "Method not allowed");
}

#[tokio::test]
async fn test_agent_failure_returns_500_with_message() {
    let orchestrator = MindOrchestrator::new(
        Arc::new(GrokAgent),
        Arc::new(BrokenArchive),
        Arc::new(FrontinusAgent),
    );
    let state = AppState::new(DashboardStore::new_shared(), orchestrator, 16);
    let app = create_router(state);

    let (status, response) = post_json(app, "/api/analyze-mind", json!({"introspection": "x"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["error"], "Agent orchestration failed");
    assert_eq!(response["details"], "memory store unreachable");
}
