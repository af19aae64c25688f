//! Crew management endpoints.
//!
//! These handlers are stubs: they validate input and echo it back without
//! keeping any team state.
//!
//! - `GET /api/crew` - list teams
//! - `POST /api/crew/create` - create a team
//! - `GET /api/crew/test` - crew module liveness probe
//! - `GET /api/crew/{team_id}` - team details
//! - `POST /api/crew/{team_id}/add_member` - add a member to a team

use crate::routes::method_not_allowed;
use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::num::FpCategory;
use validator::Validate;

/// Teams returned by the list endpoint.
const TEAMS: [&str; 3] = ["Team A", "Team B", "Team C"];

/// Request body for team creation.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateTeamRequest {
    /// Team name (required, non-empty string).
    #[serde(default)]
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,
}

/// Request body for adding a member.
///
/// Member details are free-form JSON; they only need to be present and not
/// falsy (`null`, `false`, `0` or `""`).
#[derive(Debug, Default, Deserialize)]
pub struct AddMemberRequest {
    /// Member details.
    #[serde(default)]
    pub member: Option<Value>,
}

impl AddMemberRequest {
    fn has_member(&self) -> bool {
        match &self.member {
            None | Some(Value::Null | Value::Bool(false)) => false,
            Some(Value::Number(n)) if n.as_f64().map(f64::classify) == Some(FpCategory::Zero) => {
                false
            }
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}

/// Response listing all teams.
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamListResponse {
    pub teams: Vec<String>,
}

/// Response for a single team lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamDetailsResponse {
    pub team_id: String,
    pub details: String,
}

/// Generic message response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Crew module probe response.
#[derive(Debug, Serialize, Deserialize)]
pub struct CrewProbeResponse {
    pub status: String,
    pub module: String,
    pub timestamp: String,
}

/// Error response for crew endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct CrewError {
    pub error: String,
}

type ErrorReply = (StatusCode, Json<CrewError>);

fn bad_request(message: &str) -> ErrorReply {
    (
        StatusCode::BAD_REQUEST,
        Json(CrewError {
            error: message.to_string(),
        }),
    )
}

/// Creates the crew routes.
pub fn crew_routes() -> Router {
    Router::new()
        .route("/api/crew", get(list_teams).fallback(method_not_allowed))
        .route(
            "/api/crew/create",
            post(create_team).fallback(method_not_allowed),
        )
        .route("/api/crew/test", get(crew_probe).fallback(method_not_allowed))
        .route(
            "/api/crew/{team_id}",
            get(get_team).fallback(method_not_allowed),
        )
        .route(
            "/api/crew/{team_id}/add_member",
            post(add_member).fallback(method_not_allowed),
        )
}

async fn list_teams() -> Json<TeamListResponse> {
    Json(TeamListResponse {
        teams: TEAMS.iter().map(ToString::to_string).collect(),
    })
}

/// Handler for POST /api/crew/create.
///
/// Malformed bodies are treated the same as a missing name.
async fn create_team(
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ErrorReply> {
    let request = payload.map(|Json(r)| r).unwrap_or_default();

    if request.validate().is_err() {
        return Err(bad_request("Team name is required"));
    }

    tracing::info!(team = %request.name, "Team created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Team '{}' created successfully", request.name),
        }),
    ))
}

async fn get_team(Path(team_id): Path<String>) -> Json<TeamDetailsResponse> {
    Json(TeamDetailsResponse {
        team_id,
        details: "Team details here".to_string(),
    })
}

/// Handler for POST /api/crew/{team_id}/add_member.
async fn add_member(
    Path(team_id): Path<String>,
    payload: Result<Json<AddMemberRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ErrorReply> {
    let request = payload.map(|Json(r)| r).unwrap_or_default();

    if !request.has_member() {
        return Err(bad_request("Member details are required"));
    }

    tracing::info!(%team_id, "Member added");

    Ok(Json(MessageResponse {
        message: format!("Member added to team {team_id}"),
    }))
}

async fn crew_probe() -> Json<CrewProbeResponse> {
    Json(CrewProbeResponse {
        status: "ok".to_string(),
        module: "CrewAI".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
