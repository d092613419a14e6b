//! Governance engine port
//!
//! An external policy evaluator judging autonomy tasks. Its verdict is
//! merged fail-closed with the playbook guardrails; an engine error counts
//! as an unsafe judgment.

use async_trait::async_trait;
use steward_domain::{AutonomyGovernanceCheck, AutonomyTask};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GovernanceEngineError {
    #[error("Policy evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Policy engine unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait GovernanceEngine: Send + Sync {
    /// Judge a task.
    ///
    /// `actor` is the approving human, if any. `Ok(None)` means the engine
    /// has no opinion on this task.
    async fn evaluate(
        &self,
        task: &AutonomyTask,
        actor: Option<&str>,
    ) -> Result<Option<AutonomyGovernanceCheck>, GovernanceEngineError>;
}

/// Engine that never has an opinion
pub struct NoGovernanceEngine;

#[async_trait]
impl GovernanceEngine for NoGovernanceEngine {
    async fn evaluate(
        &self,
        _task: &AutonomyTask,
        _actor: Option<&str>,
    ) -> Result<Option<AutonomyGovernanceCheck>, GovernanceEngineError> {
        Ok(None)
    }
}
