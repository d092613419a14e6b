//! Executor that describes a dispatch without performing it.

use async_trait::async_trait;
use steward_application::{ExecutorError, TaskExecutorPort};
use steward_domain::{AutonomyTask, TaskOutcome, TaskPayload};
use tracing::info;

/// Accepts every approved task and reports what would have been dispatched.
///
/// Engines listed with [`with_engines`](Self::with_engines) restrict which
/// targets are recognized; an empty list recognizes all of them.
#[derive(Debug, Clone, Default)]
pub struct DryRunExecutor {
    engines: Vec<String>,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engines(mut self, engines: Vec<String>) -> Self {
        self.engines = engines;
        self
    }
}

#[async_trait]
impl TaskExecutorPort for DryRunExecutor {
    async fn execute(&self, task: &AutonomyTask) -> Result<TaskOutcome, ExecutorError> {
        if !self.engines.is_empty() && !self.engines.contains(&task.target_engine) {
            return Err(ExecutorError::UnknownEngine(task.target_engine.clone()));
        }

        info!(
            task = %task.id,
            engine = %task.target_engine,
            "Dry-run dispatch recorded"
        );

        let data = TaskPayload::new()
            .with("engine", task.target_engine.clone())
            .with("input", task.input.clone());
        Ok(TaskOutcome::success(format!(
            "Dry run: would dispatch '{}' to {}",
            task.goal, task.target_engine
        ))
        .with_data(data))
    }
}
