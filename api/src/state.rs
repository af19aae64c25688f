//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers.

use crate::config::DEFAULT_STREAM_CAPACITY;
use shared::agents::MindOrchestrator;
use shared::models::LogEntry;
use shared::storage::{DashboardStore, StoreChange, Subscription};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Application state shared across all request handlers.
///
/// Holds the server-side dashboard store, the agent orchestrator and the
/// broadcast channel that fans appended log lines out to `/logs/stream`
/// sockets.
#[derive(Clone)]
pub struct AppState {
    /// The dashboard state store.
    store: Arc<DashboardStore>,
    /// Orchestrator used by the analyze endpoint.
    orchestrator: MindOrchestrator,
    /// Sender side of the log fan-out.
    log_tx: broadcast::Sender<LogEntry>,
    /// Keeps the store-to-broadcast forwarder registered.
    _log_forwarder: Arc<Subscription>,
}

impl AppState {
    /// Creates a new application state over the given store and orchestrator.
    ///
    /// `stream_capacity` is the number of log lines buffered for each stream
    /// subscriber; a slower subscriber skips lines beyond that.
    #[must_use]
    pub fn new(
        store: Arc<DashboardStore>,
        orchestrator: MindOrchestrator,
        stream_capacity: usize,
    ) -> Self {
        let (log_tx, _) = broadcast::channel(stream_capacity.max(1));

        let forward_tx = log_tx.clone();
        let log_forwarder = store.subscribe(move |change| {
            if let StoreChange::LogAppended { entry, .. } = change {
                // No receivers just means nobody is streaming right now.
                let _ = forward_tx.send(entry.clone());
            }
        });

        Self {
            store,
            orchestrator,
            log_tx,
            _log_forwarder: Arc::new(log_forwarder),
        }
    }

    /// Creates a new application state with an empty in-memory store and the
    /// canned agents.
    ///
    /// This is useful for development and testing.
    #[must_use]
    pub fn with_in_memory_store() -> Self {
        Self::new(
            DashboardStore::new_shared(),
            MindOrchestrator::with_mock_agents(),
            DEFAULT_STREAM_CAPACITY,
        )
    }

    /// Returns a reference to the dashboard store.
    #[must_use]
    pub fn store(&self) -> &DashboardStore {
        self.store.as_ref()
    }

    /// Returns a shared handle to the dashboard store.
    #[must_use]
    pub fn shared_store(&self) -> Arc<DashboardStore> {
        Arc::clone(&self.store)
    }

    /// Returns a reference to the agent orchestrator.
    #[must_use]
    pub fn orchestrator(&self) -> &MindOrchestrator {
        &self.orchestrator
    }

    /// Subscribes to log lines appended from now on.
    #[must_use]
    pub fn subscribe_logs(&self) -> broadcast::Receiver<LogEntry> {
        self.log_tx.subscribe()
    }

    /// Returns the number of active log stream subscribers.
    #[must_use]
    pub fn stream_subscriber_count(&self) -> usize {
        self.log_tx.receiver_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_in_memory_store()
    }
}
