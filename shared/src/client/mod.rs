//! HTTP/WebSocket client for the Aethero API.
//!
//! [`DashboardClient`] bridges the API endpoints into a local
//! [`DashboardStore`]:
//!
//! - [`DashboardClient::pull_logs`] fetches `/api/logs` once and appends every line
//! - [`DashboardClient::fetch_metrics`] fetches `/api/metrics` once and replaces the snapshot
//! - [`DashboardClient::stream_logs`] opens `/logs/stream` and appends each message
//!
//! Failures never touch the store; they are returned to the caller and logged.

mod log_stream;

pub use log_stream::LogStream;

use crate::models::{LogEntry, MetricsSnapshot, MetricsValidationError, MindAnalysis};
use crate::storage::DashboardStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while talking to the API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL is not an `http` or `https` URL.
    #[error("Invalid API URL '{0}': expected http:// or https://")]
    InvalidUrl(String),

    /// The HTTP request failed or the body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The metrics payload did not pass validation.
    #[error(transparent)]
    InvalidMetrics(#[from] MetricsValidationError),

    /// The WebSocket connection failed.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

/// Response for an accepted log line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSubmitResponse {
    /// Number of lines accepted.
    pub accepted: usize,
    /// Index the line was stored at.
    pub index: usize,
}

#[derive(Debug, Serialize)]
struct LogSubmitRequest<'a> {
    entry: &'a str,
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    introspection: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    data: MindAnalysis,
}

/// Client for the Aethero API.
///
/// # Example
///
/// ```no_run
/// use shared::client::DashboardClient;
/// use shared::storage::DashboardStore;
///
/// # async fn example() -> Result<(), shared::client::ClientError> {
/// let client = DashboardClient::new("http://localhost:8080")?;
/// let store = DashboardStore::new_shared();
///
/// client.pull_logs(&store).await?;
/// client.fetch_metrics(&store).await?;
///
/// let stream = client.stream_logs(store.clone()).await?;
/// // ... render panels from store.state() ...
/// stream.close().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl DashboardClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an `http://` or `https://` URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(base_url));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Returns the WebSocket URL of the log stream.
    #[must_use]
    pub fn stream_url(&self) -> String {
        let ws_base = if let Some(rest) = self.base_url.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = self.base_url.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            self.base_url.clone()
        };
        format!("{ws_base}/logs/stream")
    }

    /// Checks the API health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server is unhealthy.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Fetches `/api/logs` once and appends every line to `store` in response order.
    ///
    /// Returns the number of lines appended. Nothing is appended unless the
    /// whole response decodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success, or
    /// the body is not an array of strings.
    pub async fn pull_logs(&self, store: &DashboardStore) -> Result<usize, ClientError> {
        let result = async {
            let response = self.http.get(self.url("/api/logs")).send().await?;
            let entries: Vec<LogEntry> = check_status(response).await?.json().await?;
            Ok::<_, ClientError>(entries)
        }
        .await;

        let entries = result.inspect_err(|e| {
            tracing::warn!(error = %e, "Log pull failed; store left unchanged");
        })?;

        let count = entries.len();
        for entry in entries {
            store.append_log(entry);
        }

        tracing::debug!(count, "Pulled log entries");
        Ok(count)
    }

    /// Fetches `/api/metrics` once and replaces the snapshot in `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success, or
    /// the body is not a JSON object. The store keeps its previous snapshot.
    pub async fn fetch_metrics(&self, store: &DashboardStore) -> Result<(), ClientError> {
        let result = async {
            let response = self.http.get(self.url("/api/metrics")).send().await?;
            let body: Value = check_status(response).await?.json().await?;
            Ok::<_, ClientError>(MetricsSnapshot::try_from(body)?)
        }
        .await;

        let snapshot = result.inspect_err(|e| {
            tracing::warn!(error = %e, "Metrics fetch failed; store left unchanged");
        })?;

        store.replace_metrics(snapshot);
        tracing::debug!("Fetched metrics snapshot");
        Ok(())
    }

    /// Opens the push feed and appends each received line to `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the WebSocket handshake fails.
    pub async fn stream_logs(&self, store: Arc<DashboardStore>) -> Result<LogStream, ClientError> {
        LogStream::connect(&self.stream_url(), store).await
    }

    /// Submits a single log line.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the line.
    pub async fn submit_log(&self, entry: &str) -> Result<LogSubmitResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/api/logs"))
            .json(&LogSubmitRequest { entry })
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Requests a mind analysis of `introspection`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the orchestration fails on the
    /// server; the error carries the server's response body.
    pub async fn analyze(&self, introspection: &str) -> Result<MindAnalysis, ClientError> {
        let response = self
            .http
            .post(self.url("/api/analyze-mind"))
            .json(&AnalyzeRequest { introspection })
            .send()
            .await?;
        let body: AnalyzeResponse = check_status(response).await?.json().await?;
        Ok(body.data)
    }
}

/// Turns a non-success response into a `ClientError::Status`.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}
