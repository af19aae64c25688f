//! Analysis agents and their orchestration.
//!
//! An [`Agent`] turns introspection text into one typed report. The
//! [`MindOrchestrator`] runs the Grok, Archivus and Frontinus agents
//! concurrently and joins their reports into a single [`MindAnalysis`].
//!
//! [`MindAnalysis`]: crate::models::MindAnalysis

pub mod mock;
pub mod orchestrator;

pub use mock::{ArchivusAgent, FrontinusAgent, GrokAgent};
pub use orchestrator::MindOrchestrator;

use futures_util::future::BoxFuture;
use thiserror::Error;

/// Failure reported by a single agent.
///
/// The display form is the agent's own message, so callers can surface it
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AgentError {
    /// Name of the agent that failed.
    pub agent: String,
    /// Human-readable failure message.
    pub message: String,
}

impl AgentError {
    /// Creates a new agent error.
    #[must_use]
    pub fn new(agent: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            message: message.into(),
        }
    }
}

/// Future returned by [`Agent::analyze`].
pub type AgentFuture<'a, R> = BoxFuture<'a, Result<R, AgentError>>;

/// An analysis agent producing reports of type `R`.
///
/// Implementations must be thread-safe (Send + Sync) so a single orchestrator
/// can be shared across request handlers.
pub trait Agent<R>: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Analyzes the given introspection text.
    fn analyze<'a>(&'a self, text: &'a str) -> AgentFuture<'a, R>;
}
