//! Canned agents.
//!
//! These agents do not inspect the text; they return fixed reports so the
//! dashboard has something to render without an agent backend.

use super::{Agent, AgentFuture};
use crate::models::{ArchivusReport, EmotionChart, FrontinusReport, GrokReport, TimelineEvent};
use chrono::{Duration, Utc};
use futures_util::FutureExt;

/// Agent producing the thematic summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrokAgent;

impl Agent<GrokReport> for GrokAgent {
    fn name(&self) -> &'static str {
        "grok"
    }

    fn analyze<'a>(&'a self, text: &'a str) -> AgentFuture<'a, GrokReport> {
        async move {
            tracing::debug!(agent = self.name(), chars = text.chars().count(), "Analyzing");
            Ok(GrokReport {
                summary: "Grok analyzed the introspection and identified its main themes."
                    .to_string(),
                logic: vec![
                    "Self-reflection".to_string(),
                    "Emotional balance".to_string(),
                    "Purposefulness".to_string(),
                ],
                mbti: "INFJ".to_string(),
                confidence: 0.92,
            })
        }
        .boxed()
    }
}

/// Agent reconstructing a timeline and memory links.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchivusAgent;

impl Agent<ArchivusReport> for ArchivusAgent {
    fn name(&self) -> &'static str {
        "archivus"
    }

    fn analyze<'a>(&'a self, text: &'a str) -> AgentFuture<'a, ArchivusReport> {
        async move {
            tracing::debug!(agent = self.name(), chars = text.chars().count(), "Analyzing");
            let now = Utc::now();
            Ok(ArchivusReport {
                timeline: vec![
                    TimelineEvent {
                        event: "Introspection started".to_string(),
                        timestamp: now - Duration::seconds(60),
                    },
                    TimelineEvent {
                        event: "Key thought identified".to_string(),
                        timestamp: now - Duration::seconds(30),
                    },
                    TimelineEvent {
                        event: "Conclusion".to_string(),
                        timestamp: now,
                    },
                ],
                memory_links: vec![
                    "2025-06-01-reflection".to_string(),
                    "2025-05-28-session".to_string(),
                ],
            })
        }
        .boxed()
    }
}

/// Agent producing the emotional profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontinusAgent;

impl Agent<FrontinusReport> for FrontinusAgent {
    fn name(&self) -> &'static str {
        "frontinus"
    }

    fn analyze<'a>(&'a self, text: &'a str) -> AgentFuture<'a, FrontinusReport> {
        async move {
            tracing::debug!(agent = self.name(), chars = text.chars().count(), "Analyzing");
            let emotion_chart = EmotionChart {
                joy: 0.7,
                sadness: 0.1,
                anger: 0.05,
                surprise: 0.15,
            };
            Ok(FrontinusReport {
                dominant_emotion: emotion_chart.dominant().to_string(),
                emotion_chart,
            })
        }
        .boxed()
    }
}
