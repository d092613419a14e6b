//! Autonomy task domain
//!
//! Coarse automated tasks proposed by a planner are judged by playbook
//! guardrails and an optional policy engine, then tracked across five
//! disjoint pools:
//!
//! ```text
//!            ┌──unsafe──→ BLOCKED ←──executor failure──┐
//! planned ───┼──awaiting approval──→ PENDING ──reject──→ REJECTED
//!            └──safe──→ QUEUED ──approve──→ RUNNING ──→ COMPLETED
//! ```
//!
//! `simulate_only` tasks go straight to COMPLETED on approval once every
//! judgment is safe.

pub mod cycle;
pub mod governance;
pub mod payload;
pub mod playbook;
pub mod pools;
pub mod task;

pub use cycle::{CycleOptions, CyclePlan, CycleResult, PlanEntry, StatusSnapshot};
pub use governance::{AutonomyGovernanceCheck, merge_governance};
pub use payload::{ACTION_KEY, SIMULATE_ONLY_KEY, TaskPayload};
pub use playbook::{HUMAN_APPROVAL, Playbook, PlaybookGuardrails};
pub use pools::{PendingFilters, PoolCounts, PoolKind, TaskPools};
pub use task::{AutonomyTask, AutonomyTaskStatus, PlannedTask, Severity, TaskId, TaskOutcome};
