//! Data models for the Aethero dashboard.
//!
//! This module contains the log line, metrics snapshot and analysis report types.

pub mod analysis;
pub mod log;
pub mod metrics;

pub use analysis::{
    ArchivusReport, EmotionChart, FrontinusReport, GrokReport, MindAnalysis, TimelineEvent,
};
pub use log::LogEntry;
pub use metrics::{MetricsSnapshot, MetricsValidationError};
