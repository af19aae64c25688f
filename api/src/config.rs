//! Server configuration module.
//!
//! Handles loading configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Default capacity of the per-socket log broadcast buffer.
pub const DEFAULT_STREAM_CAPACITY: usize = 1024;

/// Default maximum request body size (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Server configuration.
///
/// Configuration values can be set via environment variables:
/// - `AETHERO_HOST`: The host address to bind to (default: "0.0.0.0")
/// - `AETHERO_PORT`: The port to listen on (default: 8080)
/// - `AETHERO_STREAM_CAPACITY`: Log lines buffered per stream subscriber (default: 1024)
/// - `AETHERO_MAX_BODY_BYTES`: Maximum accepted request body size (default: 1 MiB)
#[derive(Debug, Clone)]
pub struct Config {
    /// The host address to bind to.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
    /// Log lines buffered for each `/logs/stream` subscriber before it lags.
    pub stream_capacity: usize,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Config {
    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any numeric variable is set but cannot be parsed,
    /// or if `AETHERO_STREAM_CAPACITY` is zero.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("AETHERO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("AETHERO_PORT")
            .ok()
            .map(|p| p.parse::<u16>())
            .transpose()
            .context("AETHERO_PORT must be a valid port number")?
            .unwrap_or(8080);

        let stream_capacity = std::env::var("AETHERO_STREAM_CAPACITY")
            .ok()
            .map(|c| c.parse::<usize>())
            .transpose()
            .context("AETHERO_STREAM_CAPACITY must be a positive integer")?
            .unwrap_or(DEFAULT_STREAM_CAPACITY);
        anyhow::ensure!(
            stream_capacity > 0,
            "AETHERO_STREAM_CAPACITY must be greater than zero"
        );

        let max_body_bytes = std::env::var("AETHERO_MAX_BODY_BYTES")
            .ok()
            .map(|b| b.parse::<usize>())
            .transpose()
            .context("AETHERO_MAX_BODY_BYTES must be a positive integer")?
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        Ok(Self {
            host,
            port,
            stream_capacity,
            max_body_bytes,
        })
    }

    /// Returns the socket address for binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the host and port combination is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            stream_capacity: DEFAULT_STREAM_CAPACITY,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
