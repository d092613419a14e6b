//! Advisory agent port
//!
//! Defines the interface for consulting one named advisory agent about one
//! question. How an agent produces its recommendations (inference call,
//! rules, canned answers) is an adapter concern.

use async_trait::async_trait;
use steward_domain::AgentAnswer;
use thiserror::Error;

/// Errors that can occur while consulting an agent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Agent unavailable: {0}")]
    Unavailable(String),

    #[error("Agent request failed: {0}")]
    RequestFailed(String),
}

/// One consultation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentQuery {
    /// Position of the question in the session
    pub question_index: usize,
    /// Name of the agent to consult
    pub agent: String,
    pub scopes: Vec<String>,
    pub question: String,
}

/// Gateway to the advisory agents.
///
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait AdvisoryAgent: Send + Sync {
    /// Ask `query.agent` for its recommendations on `query.question`
    async fn consult(&self, query: &AgentQuery) -> Result<AgentAnswer, AgentError>;
}
