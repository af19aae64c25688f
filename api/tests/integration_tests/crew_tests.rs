//! Integration tests for the crew endpoints.
//!
//! Tests cover:
//! - Team creation success and validation
//! - Team listing and lookup
//! - Method handling

use axum::http::StatusCode;
use serde_json::json;

use super::common::{get, post_json, send_json, test_app};

#[tokio::test]
async fn test_create_team_echoes_name() {
    let (app, _state) = test_app();

    let (status, response) = post_json(app, "/api/crew/create", json!({"name": "Alpha"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(response.to_string().contains("Alpha"));
}

#[tokio::test]
async fn test_create_team_without_name_is_rejected() {
    let (app, _state) = test_app();

    let (status, response) = post_json(app, "/api/crew/create", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.get("error").is_some());
}

#[tokio::test]
async fn test_list_and_lookup_teams() {
    let (app, _state) = test_app();

    let (status, response) = get(app.clone(), "/api/crew").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["teams"].as_array().unwrap().len(), 3);

    let (status, response) = get(app, "/api/crew/team-b").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["team_id"], "team-b");
}

#[tokio::test]
async fn test_add_member_to_team() {
    let (app, _state) = test_app();

    let (status, response) = post_json(
        app.clone(),
        "/api/crew/team-b/add_member",
        json!({"member": {"name": "Primus", "role": "lead"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "Member added to team team-b");

    let (status, _) = post_json(app, "/api/crew/team-b/add_member", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_crew_wrong_methods() {
    let (app, _state) = test_app();

    let (status, response) = send_json(app.clone(), "DELETE", "/api/crew", &json!({})).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response["error"], "Method not allowed");

    let (status, _) = send_json(app.clone(), "PUT", "/api/crew/team-b", &json!({})).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = get(app, "/api/crew/team-b/add_member").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
