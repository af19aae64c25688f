//! Dashboard state store.
//!
//! Provides `DashboardStore`, the shared container for the log sequence and
//! the latest metrics snapshot, together with its observer subscriptions.

use crate::models::{LogEntry, MetricsSnapshot};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

/// A change applied to the store, delivered to every subscriber.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreChange {
    /// A line was appended at `index`.
    LogAppended {
        /// Position of the new line in the log sequence.
        index: usize,
        /// The appended line.
        entry: LogEntry,
    },
    /// The metrics snapshot was replaced.
    MetricsReplaced {
        /// The new snapshot.
        snapshot: MetricsSnapshot,
    },
}

/// Immutable copy of the store contents, suitable for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StateSnapshot {
    /// All log lines in append order.
    pub logs: Vec<LogEntry>,
    /// The latest metrics snapshot, if any has been received.
    pub metrics: Option<MetricsSnapshot>,
}

/// Callback invoked for every store change.
pub type Subscriber = Arc<dyn Fn(&StoreChange) + Send + Sync>;

type SubscriberList = Mutex<Vec<(u64, Subscriber)>>;

/// Shared application state for dashboard panels.
///
/// The store owns an append-only log sequence and an optional metrics
/// snapshot. Both mutations always succeed and notify every subscriber.
///
/// Mutations and their notifications are serialized, so subscribers see
/// changes in exactly the order they were applied even when several
/// producers append concurrently. Callbacks run on the mutating task and
/// must not mutate the store themselves; reading via [`state`] is fine.
///
/// [`state`]: DashboardStore::state
///
/// # Example
///
/// ```
/// use shared::storage::DashboardStore;
///
/// let store = DashboardStore::new();
/// store.append_log("a");
/// store.append_log("b");
///
/// assert_eq!(store.state().logs, vec!["a", "b"]);
/// assert!(store.state().metrics.is_none());
/// ```
#[derive(Default)]
pub struct DashboardStore {
    state: RwLock<StateSnapshot>,
    subscribers: Arc<SubscriberList>,
    next_subscriber_id: AtomicU64,
    write_order: Mutex<()>,
}

impl DashboardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store wrapped in an Arc.
    ///
    /// This is useful when sharing the store between feeds and panels.
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Appends a line to the end of the log sequence and notifies subscribers.
    ///
    /// Returns the index the line was stored at.
    pub fn append_log(&self, entry: impl Into<LogEntry>) -> usize {
        let entry = entry.into();
        let _order = self.write_order.lock().unwrap_or_else(PoisonError::into_inner);

        let index = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.logs.push(entry.clone());
            state.logs.len() - 1
        };

        tracing::trace!(index, "Log entry appended");
        self.notify(&StoreChange::LogAppended { index, entry });
        index
    }

    /// Replaces the metrics snapshot and notifies subscribers.
    ///
    /// The previous snapshot is discarded, not merged.
    pub fn replace_metrics(&self, snapshot: MetricsSnapshot) {
        let _order = self.write_order.lock().unwrap_or_else(PoisonError::into_inner);

        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.metrics = Some(snapshot.clone());
        }

        tracing::trace!("Metrics snapshot replaced");
        self.notify(&StoreChange::MetricsReplaced { snapshot });
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> StateSnapshot {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of stored log lines.
    #[must_use]
    pub fn log_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .logs
            .len()
    }

    /// Returns the current metrics snapshot, if any.
    #[must_use]
    pub fn metrics(&self) -> Option<MetricsSnapshot> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .metrics
            .clone()
    }

    /// Registers a callback for every subsequent change.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unregisters the callback"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&StoreChange) + Send + Sync + 'static,
    {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(callback)));

        tracing::debug!(subscriber_id = id, "Store subscriber registered");

        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, change: &StoreChange) {
        // Snapshot the list so callbacks may subscribe or unsubscribe.
        let callbacks: Vec<Subscriber> = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(change);
        }
    }
}

impl fmt::Debug for DashboardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardStore")
            .field("log_count", &self.log_count())
            .field("has_metrics", &self.metrics().is_some())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle for a registered store callback.
///
/// Dropping the handle unregisters the callback. A notification that is
/// already being delivered may still complete.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    subscribers: Weak<SubscriberList>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|(id, _)| *id != self.id);
            tracing::debug!(subscriber_id = self.id, "Store subscriber removed");
        }
    }
}
