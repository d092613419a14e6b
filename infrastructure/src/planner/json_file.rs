//! Planner that reads proposed tasks from a JSON file.
//!
//! The file holds an array of planned tasks:
//!
//! ```json
//! [
//!   {"goal": "Refresh stale listings", "targetEngine": "catalog", "type": "maintenance",
//!    "severity": "medium", "brandId": "acme", "playbook": "catalog-hygiene",
//!    "input": {"action": "update descriptions"}}
//! ]
//! ```
//!
//! The file is re-read on every cycle, so edits take effect without a restart.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use steward_application::{OpportunityPlanner, PlannerError};
use steward_domain::{CycleOptions, PlannedTask};
use tracing::debug;

pub struct JsonFilePlanner {
    path: PathBuf,
}

impl JsonFilePlanner {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OpportunityPlanner for JsonFilePlanner {
    /// Tasks for the requested brand; tasks without a brand apply to every brand.
    async fn plan(&self, options: &CycleOptions) -> Result<Vec<PlannedTask>, PlannerError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let planned: Vec<PlannedTask> = serde_json::from_str(&content)
            .map_err(|e| PlannerError::InvalidPlan(format!("{}: {}", self.path.display(), e)))?;

        let total = planned.len();
        let selected: Vec<PlannedTask> = planned
            .into_iter()
            .filter(|task| match (&options.brand_id, &task.brand_id) {
                (Some(wanted), Some(brand)) => wanted == brand,
                _ => true,
            })
            .collect();

        debug!(
            path = %self.path.display(),
            total,
            selected = selected.len(),
            "Plan file read"
        );
        Ok(selected)
    }
}
