//! Text panels rendered from store snapshots.
//!
//! Renderers are pure: they take a snapshot and return the text to print,
//! without touching the store.

use serde_json::Value;
use shared::models::{LogEntry, MetricsSnapshot};
use shared::storage::StateSnapshot;
use std::fmt::Write;

/// Number of log lines shown by the dashboard view.
pub const DASHBOARD_LOG_LINES: usize = 20;

/// Renders the log panel, showing at most the last `max_lines` entries.
///
/// Lines are prefixed with their position in the full log so truncation is
/// visible.
pub fn log_panel(logs: &[LogEntry], max_lines: usize) -> String {
    let mut out = format!("── Logs ({}) ──\n", logs.len());

    if logs.is_empty() {
        out.push_str("  (no log entries yet)\n");
        return out;
    }

    let skip = logs.len().saturating_sub(max_lines);
    if skip > 0 {
        let _ = writeln!(out, "  … {skip} earlier entries");
    }
    for (index, entry) in logs.iter().enumerate().skip(skip) {
        let _ = writeln!(out, "  {index:>4}  {entry}");
    }
    out
}

/// Renders the metrics panel as one `key: value` row per field.
pub fn metrics_panel(metrics: Option<&MetricsSnapshot>) -> String {
    let mut out = String::from("── Metrics ──\n");

    let Some(metrics) = metrics else {
        out.push_str("  (no metrics available)\n");
        return out;
    };

    if metrics.fields().is_empty() {
        out.push_str("  (empty snapshot)\n");
        return out;
    }

    let width = metrics.fields().keys().map(String::len).max().unwrap_or(0);
    for (key, value) in metrics.fields() {
        let _ = writeln!(out, "  {key:<width$}  {}", format_value(value));
    }
    out
}

/// Renders both panels for the dashboard view.
pub fn dashboard(snapshot: &StateSnapshot) -> String {
    format!(
        "{}\n{}",
        metrics_panel(snapshot.metrics.as_ref()),
        log_panel(&snapshot.logs, DASHBOARD_LOG_LINES)
    )
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
