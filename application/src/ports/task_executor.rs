//! Task executor port
//!
//! The downstream engine that carries out an approved, governance-cleared
//! autonomy task.

use async_trait::async_trait;
use steward_domain::{AutonomyTask, TaskOutcome};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("No executor for engine: {0}")]
    UnknownEngine(String),

    #[error("Execution failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait TaskExecutorPort: Send + Sync {
    async fn execute(&self, task: &AutonomyTask) -> Result<TaskOutcome, ExecutorError>;
}
