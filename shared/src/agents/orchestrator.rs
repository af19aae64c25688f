//! Concurrent fan-out over the three analysis agents.

use super::{Agent, AgentError, ArchivusAgent, FrontinusAgent, GrokAgent};
use crate::models::{ArchivusReport, FrontinusReport, GrokReport, MindAnalysis};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Runs the Grok, Archivus and Frontinus agents concurrently.
///
/// All three agents are started without waiting on one another. The combined
/// result is produced only once every agent has completed. The first agent to
/// fail fails the whole run: the remaining agents are cancelled and the
/// failing agent's error is returned unchanged.
///
/// # Example
///
/// ```
/// use shared::agents::MindOrchestrator;
///
/// # tokio_test::block_on(async {
/// let orchestrator = MindOrchestrator::with_mock_agents();
/// let analysis = orchestrator.analyze("A quiet, focused day").await.unwrap();
/// assert_eq!(analysis.grok.mbti, "INFJ");
/// # });
/// ```
#[derive(Clone)]
pub struct MindOrchestrator {
    grok: Arc<dyn Agent<GrokReport>>,
    archivus: Arc<dyn Agent<ArchivusReport>>,
    frontinus: Arc<dyn Agent<FrontinusReport>>,
}

impl MindOrchestrator {
    /// Creates an orchestrator over the given agents.
    #[must_use]
    pub fn new(
        grok: Arc<dyn Agent<GrokReport>>,
        archivus: Arc<dyn Agent<ArchivusReport>>,
        frontinus: Arc<dyn Agent<FrontinusReport>>,
    ) -> Self {
        Self {
            grok,
            archivus,
            frontinus,
        }
    }

    /// Creates an orchestrator over the canned agents.
    #[must_use]
    pub fn with_mock_agents() -> Self {
        Self::new(
            Arc::new(GrokAgent),
            Arc::new(ArchivusAgent),
            Arc::new(FrontinusAgent),
        )
    }

    /// Analyzes introspection text with all three agents.
    ///
    /// # Errors
    ///
    /// Returns the error of the first agent that fails. No partial result is
    /// produced.
    pub async fn analyze(&self, text: &str) -> Result<MindAnalysis, AgentError> {
        let started = Instant::now();

        let (grok, archivus, frontinus) = tokio::try_join!(
            self.grok.analyze(text),
            self.archivus.analyze(text),
            self.frontinus.analyze(text),
        )
        .inspect_err(|e| {
            tracing::warn!(agent = %e.agent, error = %e.message, "Agent orchestration failed");
        })?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis(),
            "Agent orchestration completed"
        );

        Ok(MindAnalysis {
            grok,
            archivus,
            frontinus,
            timestamp: Utc::now(),
        })
    }
}

impl Default for MindOrchestrator {
    fn default() -> Self {
        Self::with_mock_agents()
    }
}

impl fmt::Debug for MindOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MindOrchestrator")
            .field("grok", &self.grok.name())
            .field("archivus", &self.archivus.name())
            .field("frontinus", &self.frontinus.name())
            .finish()
    }
}
