//! State storage for the dashboard.
//!
//! This module provides the `DashboardStore`, the single shared container for
//! log lines and the latest metrics snapshot, and its subscription handles.

pub mod dashboard_store;

pub use dashboard_store::{DashboardStore, StateSnapshot, StoreChange, Subscriber, Subscription};
