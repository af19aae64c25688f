//! Log data model.
//!
//! Defines the `LogEntry` line held by the dashboard store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single log line.
///
/// Log entries are opaque text. They carry no schema and no identity beyond
/// their position in the store; the store only ever appends them.
///
/// # Example
///
/// ```
/// use shared::models::LogEntry;
///
/// let entry = LogEntry::new("parser started");
/// assert_eq!(entry.as_str(), "parser started");
/// assert_eq!(entry, "parser started");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntry(String);

impl LogEntry {
    /// Creates a new log entry from any text.
    #[must_use]
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    /// Returns the line as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the entry and returns the owned line.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns true if the line contains only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for LogEntry {
    fn from(line: String) -> Self {
        Self(line)
    }
}

impl From<&str> for LogEntry {
    fn from(line: &str) -> Self {
        Self(line.to_string())
    }
}

impl PartialEq<str> for LogEntry {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LogEntry {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
