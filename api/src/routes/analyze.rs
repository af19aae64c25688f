//! Mind analysis endpoint.
//!
//! `POST /api/analyze-mind` runs the three analysis agents over the submitted
//! introspection text and returns their combined reports.

use crate::routes::method_not_allowed;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use shared::models::MindAnalysis;
use validator::Validate;

/// Request body for mind analysis.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AnalyzeMindRequest {
    /// The introspection text (required, non-empty).
    #[serde(default)]
    #[validate(length(min = 1))]
    pub introspection: String,
}

/// Successful analysis response.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeMindResponse {
    /// Always true.
    pub success: bool,
    /// Combined agent reports.
    pub data: MindAnalysis,
}

/// Error response for the analyze endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeMindError {
    /// Short error description.
    pub error: String,
    /// Underlying failure message, for orchestration failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Creates the analysis routes.
pub fn analyze_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/analyze-mind",
            post(analyze_mind).fallback(method_not_allowed),
        )
        .with_state(state)
}

/// Handler for POST /api/analyze-mind.
///
/// Returns 200 with the combined reports, 400 if the introspection text is
/// missing or not a string, and 500 if any agent fails.
async fn analyze_mind(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeMindRequest>, JsonRejection>,
) -> Response {
    let request = payload.map(|Json(r)| r).unwrap_or_default();

    if request.validate().is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(AnalyzeMindError {
                error: "Missing or invalid introspection text".to_string(),
                details: None,
            }),
        )
            .into_response();
    }

    match state.orchestrator().analyze(&request.introspection).await {
        Ok(data) => (
            StatusCode::OK,
            Json(AnalyzeMindResponse {
                success: true,
                data,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(agent = %e.agent, error = %e, "Mind analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AnalyzeMindError {
                    error: "Agent orchestration failed".to_string(),
                    details: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}
