//! Mind analysis data model.
//!
//! Reports produced by the three analysis agents and the combined result the
//! orchestrator returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Thematic summary produced by the Grok agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrokReport {
    /// Free-text summary of the introspection.
    pub summary: String,
    /// Main themes found in the text.
    pub logic: Vec<String>,
    /// MBTI type guess.
    pub mbti: String,
    /// Confidence in the range `0.0..=1.0`.
    pub confidence: f64,
}

/// One event on the Archivus timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Description of the event.
    pub event: String,
    /// When it happened.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Timeline and memory links produced by the Archivus agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivusReport {
    /// Ordered events reconstructed from the introspection.
    pub timeline: Vec<TimelineEvent>,
    /// Identifiers of related memory records.
    pub memory_links: Vec<String>,
}

/// Emotion intensities, each in the range `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionChart {
    /// Joy intensity.
    pub joy: f64,
    /// Sadness intensity.
    pub sadness: f64,
    /// Anger intensity.
    pub anger: f64,
    /// Surprise intensity.
    pub surprise: f64,
}

impl EmotionChart {
    /// Returns the name of the strongest emotion.
    ///
    /// Ties resolve in declaration order.
    #[must_use]
    pub fn dominant(&self) -> &'static str {
        let mut best = ("joy", self.joy);
        for candidate in [
            ("sadness", self.sadness),
            ("anger", self.anger),
            ("surprise", self.surprise),
        ] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        best.0
    }
}

/// Emotional profile produced by the Frontinus agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontinusReport {
    /// Per-emotion intensities.
    pub emotion_chart: EmotionChart,
    /// Name of the strongest emotion in `emotion_chart`.
    pub dominant_emotion: String,
}

/// Combined output of one orchestration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindAnalysis {
    /// Personality and reasoning report.
    pub grok: GrokReport,
    /// Memory timeline report.
    pub archivus: ArchivusReport,
    /// Emotional profile report.
    pub frontinus: FrontinusReport,
    /// Taken after all three agents have completed.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}
