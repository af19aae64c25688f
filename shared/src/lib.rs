//! Aethero Shared Library
//!
//! This crate contains the dashboard state store, the ingestion feeds that
//! fill it, and the agent orchestration used by the Aethero API.
//!
//! # Modules
//!
//! - [`models`] - Log lines, metrics snapshots and analysis reports
//! - [`storage`] - The observable dashboard state store
//! - [`client`] - Pull/push ingestion from the API into a store
//! - [`agents`] - Analysis agents and their concurrent orchestration
//!
//! # Example
//!
//! ```
//! use shared::models::MetricsSnapshot;
//! use shared::storage::DashboardStore;
//! use serde_json::json;
//!
//! let store = DashboardStore::new();
//! let _subscription = store.subscribe(|change| println!("{change:?}"));
//!
//! store.append_log("parser started");
//! store.replace_metrics(MetricsSnapshot::try_from(json!({"accuracy": 0.95})).unwrap());
//!
//! assert_eq!(store.state().logs, vec!["parser started"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod agents;
pub mod client;
pub mod models;
pub mod storage;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use serde;
pub use serde_json;
pub use validator;
