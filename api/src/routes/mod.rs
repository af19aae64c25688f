//! API route definitions.
//!
//! This module organizes all HTTP routes for the Aethero API server.

mod analyze;
mod crew;
mod dashboard;
mod health;

pub use analyze::analyze_routes;
pub use crew::crew_routes;
pub use dashboard::dashboard_routes;
pub use health::health_routes;

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Error body for requests using an unsupported HTTP method.
#[derive(Debug, Serialize)]
pub struct MethodNotAllowed {
    /// Always "Method not allowed".
    pub error: &'static str,
}

/// Fallback for routes hit with an unsupported HTTP method.
pub async fn method_not_allowed() -> (StatusCode, Json<MethodNotAllowed>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MethodNotAllowed {
            error: "Method not allowed",
        }),
    )
}
