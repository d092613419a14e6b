//! The five disjoint task pools
//!
//! Every membership change goes through a single method that removes the
//! task from wherever it is before inserting it, so an id never appears
//! in two pools.

use super::task::{AutonomyTask, AutonomyTaskStatus, Severity, TaskId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Pending,
    Blocked,
    /// Holds both QUEUED and RUNNING tasks
    QueuedRunning,
    Completed,
    Rejected,
}

impl PoolKind {
    pub const ALL: [PoolKind; 5] = [
        PoolKind::Pending,
        PoolKind::Blocked,
        PoolKind::QueuedRunning,
        PoolKind::Completed,
        PoolKind::Rejected,
    ];

    /// Pools a task can still be approved from
    pub const APPROVABLE: [PoolKind; 3] =
        [PoolKind::Pending, PoolKind::Blocked, PoolKind::QueuedRunning];

    pub fn for_status(status: AutonomyTaskStatus) -> Self {
        match status {
            AutonomyTaskStatus::Pending => PoolKind::Pending,
            AutonomyTaskStatus::Blocked => PoolKind::Blocked,
            AutonomyTaskStatus::Queued | AutonomyTaskStatus::Running => PoolKind::QueuedRunning,
            AutonomyTaskStatus::Completed => PoolKind::Completed,
            AutonomyTaskStatus::Rejected => PoolKind::Rejected,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PoolKind::Pending => "pending",
            PoolKind::Blocked => "blocked",
            PoolKind::QueuedRunning => "queued_running",
            PoolKind::Completed => "completed",
            PoolKind::Rejected => "rejected",
        }
    }
}

/// Task counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolCounts {
    pub pending: usize,
    pub blocked: usize,
    pub queued: usize,
    pub running: usize,
    pub completed: usize,
    pub rejected: usize,
}

impl PoolCounts {
    pub fn total(&self) -> usize {
        self.pending + self.blocked + self.queued + self.running + self.completed + self.rejected
    }
}

/// Filters for listing the pending pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PendingFilters {
    pub severity: Option<Severity>,
    pub brand_id: Option<String>,
    #[serde(rename = "type")]
    pub task_type: Option<String>,
    pub limit: Option<usize>,
    pub offset: usize,
}

impl PendingFilters {
    pub fn matches(&self, task: &AutonomyTask) -> bool {
        self.severity.is_none_or(|s| task.severity == s)
            && self
                .brand_id
                .as_deref()
                .is_none_or(|b| task.brand_id.as_deref() == Some(b))
            && self
                .task_type
                .as_deref()
                .is_none_or(|t| task.task_type == t)
    }
}

/// Five disjoint pools keyed by task id, each in insertion order
#[derive(Debug, Clone, Default)]
pub struct TaskPools {
    pending: Vec<AutonomyTask>,
    blocked: Vec<AutonomyTask>,
    queued_running: Vec<AutonomyTask>,
    completed: Vec<AutonomyTask>,
    rejected: Vec<AutonomyTask>,
}

impl TaskPools {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self, kind: PoolKind) -> &[AutonomyTask] {
        match kind {
            PoolKind::Pending => &self.pending,
            PoolKind::Blocked => &self.blocked,
            PoolKind::QueuedRunning => &self.queued_running,
            PoolKind::Completed => &self.completed,
            PoolKind::Rejected => &self.rejected,
        }
    }

    fn pool_mut(&mut self, kind: PoolKind) -> &mut Vec<AutonomyTask> {
        match kind {
            PoolKind::Pending => &mut self.pending,
            PoolKind::Blocked => &mut self.blocked,
            PoolKind::QueuedRunning => &mut self.queued_running,
            PoolKind::Completed => &mut self.completed,
            PoolKind::Rejected => &mut self.rejected,
        }
    }

    /// Place a task in the pool matching its status.
    ///
    /// Any previous copy with the same id is removed first.
    pub fn insert(&mut self, task: AutonomyTask) -> PoolKind {
        self.remove(&task.id);
        let kind = PoolKind::for_status(task.status);
        self.pool_mut(kind).push(task);
        kind
    }

    pub fn locate(&self, id: &TaskId) -> Option<PoolKind> {
        PoolKind::ALL
            .into_iter()
            .find(|kind| self.pool(*kind).iter().any(|t| &t.id == id))
    }

    pub fn get(&self, id: &TaskId) -> Option<&AutonomyTask> {
        PoolKind::ALL
            .into_iter()
            .find_map(|kind| self.pool(kind).iter().find(|t| &t.id == id))
    }

    /// Remove a task from whichever pool holds it
    pub fn remove(&mut self, id: &TaskId) -> Option<(PoolKind, AutonomyTask)> {
        self.take_from(id, &PoolKind::ALL)
    }

    /// Remove a task only if it sits in one of `pools`
    pub fn take_from(&mut self, id: &TaskId, pools: &[PoolKind]) -> Option<(PoolKind, AutonomyTask)> {
        for &kind in pools {
            let pool = self.pool_mut(kind);
            if let Some(pos) = pool.iter().position(|t| &t.id == id) {
                return Some((kind, pool.remove(pos)));
            }
        }
        None
    }

    /// Mutate a task found in one of `from` and re-file it by its new status.
    ///
    /// Returns a snapshot of the updated task, or `None` when it is not in
    /// any of the given pools.
    pub fn update_in<F>(&mut self, id: &TaskId, from: &[PoolKind], update: F) -> Option<AutonomyTask>
    where
        F: FnOnce(&mut AutonomyTask),
    {
        let (_, mut task) = self.take_from(id, from)?;
        update(&mut task);
        let snapshot = task.clone();
        self.insert(task);
        Some(snapshot)
    }

    pub fn counts(&self) -> PoolCounts {
        let running = self
            .queued_running
            .iter()
            .filter(|t| t.status == AutonomyTaskStatus::Running)
            .count();
        PoolCounts {
            pending: self.pending.len(),
            blocked: self.blocked.len(),
            queued: self.queued_running.len() - running,
            running,
            completed: self.completed.len(),
            rejected: self.rejected.len(),
        }
    }

    /// Filtered slice of the pending pool in insertion order
    pub fn pending_page(&self, filters: &PendingFilters, default_limit: usize) -> Vec<AutonomyTask> {
        self.pending
            .iter()
            .filter(|t| filters.matches(t))
            .skip(filters.offset)
            .take(filters.limit.unwrap_or(default_limit))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autonomy::task::PlannedTask;

    fn task(goal: &str, status: AutonomyTaskStatus) -> AutonomyTask {
        let mut t = AutonomyTask::from_plan(PlannedTask::new(goal, "engine", "growth"), 0);
        t.status = status;
        t
    }

    #[test]
    fn test_single_membership() {
        let mut pools = TaskPools::new();
        let mut t = task("a", AutonomyTaskStatus::Pending);
        let id = t.id.clone();
        pools.insert(t.clone());
        t.status = AutonomyTaskStatus::Blocked;
        pools.insert(t);

        assert_eq!(pools.locate(&id), Some(PoolKind::Blocked));
        assert_eq!(pools.counts().total(), 1);
        assert!(pools.pool(PoolKind::Pending).is_empty());
    }

    #[test]
    fn test_update_in_respects_source_pools() {
        let mut pools = TaskPools::new();
        let t = task("a", AutonomyTaskStatus::Completed);
        let id = t.id.clone();
        pools.insert(t);

        let moved = pools.update_in(&id, &PoolKind::APPROVABLE, |t| {
            t.status = AutonomyTaskStatus::Running;
        });
        assert!(moved.is_none());
        assert_eq!(pools.locate(&id), Some(PoolKind::Completed));
    }

    #[test]
    fn test_update_in_moves() {
        let mut pools = TaskPools::new();
        let t = task("a", AutonomyTaskStatus::Pending);
        let id = t.id.clone();
        pools.insert(t);

        let moved = pools
            .update_in(&id, &[PoolKind::Pending], |t| t.status = AutonomyTaskStatus::Running)
            .unwrap();
        assert_eq!(moved.status, AutonomyTaskStatus::Running);
        assert_eq!(pools.locate(&id), Some(PoolKind::QueuedRunning));
        let counts = pools.counts();
        assert_eq!((counts.queued, counts.running), (0, 1));
    }

    #[test]
    fn test_pending_page_filters_and_slices() {
        let mut pools = TaskPools::new();
        for i in 0..5 {
            let mut t = task(&format!("t{i}"), AutonomyTaskStatus::Pending);
            t.severity = if i % 2 == 0 { Severity::High } else { Severity::Low };
            t.brand_id = Some("b1".to_string());
            pools.insert(t);
        }

        let filters = PendingFilters {
            severity: Some(Severity::High),
            offset: 1,
            limit: Some(1),
            ..Default::default()
        };
        let page = pools.pending_page(&filters, 50);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].goal, "t2");

        let other_brand = PendingFilters {
            brand_id: Some("b2".to_string()),
            ..Default::default()
        };
        assert!(pools.pending_page(&other_brand, 50).is_empty());
        assert_eq!(pools.pending_page(&PendingFilters::default(), 3).len(), 3);
    }
}
