//! Cycle options, results and the status snapshot

use super::pools::PoolCounts;
use super::task::{AutonomyTaskStatus, TaskId};
use serde::{Deserialize, Serialize};

/// Options for one planning cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleOptions {
    pub brand_id: Option<String>,
    /// Cap on planned tasks taken from the planner
    pub max_tasks: Option<usize>,
    /// Record the plan without touching any pool
    pub dry_run: bool,
}

impl CycleOptions {
    pub fn for_brand(brand_id: impl Into<String>) -> Self {
        Self {
            brand_id: Some(brand_id.into()),
            ..Default::default()
        }
    }

    pub fn with_max_tasks(mut self, max: usize) -> Self {
        self.max_tasks = Some(max);
        self
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

/// Where one planned task was placed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub task_id: TaskId,
    pub goal: String,
    pub placement: AutonomyTaskStatus,
}

/// The most recent batch, kept for status reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclePlan {
    pub cycle_id: String,
    pub planned_at_ms: u64,
    pub dry_run: bool,
    pub entries: Vec<PlanEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleResult {
    pub cycle_id: String,
    pub planned: usize,
    pub queued: usize,
    pub pending: usize,
    pub blocked: usize,
    pub task_ids: Vec<TaskId>,
    pub dry_run: bool,
}

impl CycleResult {
    pub fn from_plan(plan: &CyclePlan) -> Self {
        let count = |status: AutonomyTaskStatus| plan.entries.iter().filter(|e| e.placement == status).count();
        Self {
            cycle_id: plan.cycle_id.clone(),
            planned: plan.entries.len(),
            queued: count(AutonomyTaskStatus::Queued),
            pending: count(AutonomyTaskStatus::Pending),
            blocked: count(AutonomyTaskStatus::Blocked),
            task_ids: plan.entries.iter().map(|e| e.task_id.clone()).collect(),
            dry_run: plan.dry_run,
        }
    }
}

/// Point-in-time view of the orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub counts: PoolCounts,
    pub last_plan: Option<CyclePlan>,
    pub last_cycle_at_ms: Option<u64>,
}
