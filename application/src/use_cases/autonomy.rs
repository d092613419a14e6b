//! Autonomy Task Orchestrator use case
//!
//! Runs planning cycles, judges every task with the playbook guardrails
//! and the governance engine (merged fail-closed), and tracks each task
//! across the five pools. Nothing here performs a side effect itself: the
//! only path to one is [`TaskExecutorPort::execute`], reached after a human
//! approval and a safe merged judgment.
//!
//! Engine and executor calls are made without holding the pool lock; every
//! membership change happens in one locked step.

use crate::config::AutonomyParams;
use crate::ports::audit_log::{AuditLog, NoAuditLog, record};
use crate::ports::governance_engine::{GovernanceEngine, NoGovernanceEngine};
use crate::ports::planner::{OpportunityPlanner, PlannerError};
use crate::ports::task_executor::TaskExecutorPort;
use serde_json::json;
use std::sync::Arc;
use steward_domain::core::time::new_id;
use steward_domain::{
    AuditEntry, AuditKind, AuditOutcome, AutonomyGovernanceCheck, AutonomyTask,
    AutonomyTaskStatus, CycleOptions, CyclePlan, CycleResult, PendingFilters, PlanEntry,
    PlaybookGuardrails, PoolKind, StatusSnapshot, TaskId, TaskOutcome, TaskPools,
    current_timestamp, merge_governance,
};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum AutonomyError {
    #[error("Planner error: {0}")]
    Planner(#[from] PlannerError),
}

#[derive(Default)]
struct OrchestratorState {
    pools: TaskPools,
    last_plan: Option<CyclePlan>,
    last_cycle_at_ms: Option<u64>,
}

/// What approval decided for a task, before any executor call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApprovalStep {
    Blocked,
    Simulated,
    Execute,
}

pub struct AutonomyService<P: OpportunityPlanner + 'static, E: TaskExecutorPort + 'static> {
    planner: Arc<P>,
    executor: Arc<E>,
    engine: Arc<dyn GovernanceEngine>,
    guardrails: PlaybookGuardrails,
    params: AutonomyParams,
    audit: Arc<dyn AuditLog>,
    state: Mutex<OrchestratorState>,
}

impl<P: OpportunityPlanner + 'static, E: TaskExecutorPort + 'static> AutonomyService<P, E> {
    /// Create a service with empty pools, no playbooks and no engine
    pub fn new(planner: Arc<P>, executor: Arc<E>) -> Self {
        Self {
            planner,
            executor,
            engine: Arc::new(NoGovernanceEngine),
            guardrails: PlaybookGuardrails::default(),
            params: AutonomyParams::default(),
            audit: Arc::new(NoAuditLog),
            state: Mutex::new(OrchestratorState::default()),
        }
    }

    pub fn with_governance_engine(mut self, engine: Arc<dyn GovernanceEngine>) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_guardrails(mut self, guardrails: PlaybookGuardrails) -> Self {
        self.guardrails = guardrails;
        self
    }

    pub fn with_params(mut self, params: AutonomyParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_audit_log(mut self, audit: Arc<dyn AuditLog>) -> Self {
        self.audit = audit;
        self
    }

    /// Start from pre-populated pools
    pub fn with_pools(mut self, pools: TaskPools) -> Self {
        self.state = Mutex::new(OrchestratorState {
            pools,
            ..Default::default()
        });
        self
    }

    /// Playbook judgment merged fail-closed with the engine's.
    ///
    /// An engine error counts as an unsafe judgment.
    async fn judge(&self, task: &AutonomyTask, actor: Option<&str>) -> AutonomyGovernanceCheck {
        let playbook = self.guardrails.evaluate(task, actor);
        let engine = match self.engine.evaluate(task, actor).await {
            Ok(check) => check,
            Err(e) => {
                warn!(task = %task.id, "Governance engine failed, treating as unsafe: {}", e);
                Some(AutonomyGovernanceCheck::fail_closed(format!(
                    "Governance engine error: {e}"
                )))
            }
        };
        merge_governance(&playbook, engine.as_ref())
    }

    /// Plan a batch and file every task by its judgment:
    /// safe ⇒ QUEUED, awaiting approval only ⇒ PENDING, otherwise BLOCKED.
    ///
    /// A dry run records the plan but leaves every pool untouched.
    pub async fn run_cycle(&self, options: CycleOptions) -> Result<CycleResult, AutonomyError> {
        let mut planned = self.planner.plan(&options).await?;
        if let Some(max) = options.max_tasks {
            planned.truncate(max);
        }

        let now = current_timestamp();
        let cycle_id = new_id();
        info!(cycle = %cycle_id, planned = planned.len(), dry_run = options.dry_run, "Starting autonomy cycle");

        let mut tasks = Vec::with_capacity(planned.len());
        let mut entries = Vec::with_capacity(planned.len());
        for planned_task in planned {
            let mut task = AutonomyTask::from_plan(planned_task, now);
            if task.brand_id.is_none() {
                task.brand_id = options.brand_id.clone();
            }

            let check = self.judge(&task, None).await;
            let placement = if check.safe_to_proceed {
                AutonomyTaskStatus::Queued
            } else if check.awaits_approval() {
                AutonomyTaskStatus::Pending
            } else {
                AutonomyTaskStatus::Blocked
            };
            debug!(task = %task.id, placement = %placement, violations = check.violations.len(), "Task judged");

            task.governance = Some(check);
            task.set_status(placement, now);
            entries.push(PlanEntry {
                task_id: task.id.clone(),
                goal: task.goal.clone(),
                placement,
            });
            tasks.push(task);
        }

        let plan = CyclePlan {
            cycle_id,
            planned_at_ms: now,
            dry_run: options.dry_run,
            entries,
        };
        let result = CycleResult::from_plan(&plan);

        let mut state = self.state.lock().await;
        if !options.dry_run {
            for task in tasks {
                state.pools.insert(task);
            }
        }
        state.last_plan = Some(plan);
        state.last_cycle_at_ms = Some(now);
        drop(state);

        info!(
            cycle = %result.cycle_id,
            queued = result.queued,
            pending = result.pending,
            blocked = result.blocked,
            "Autonomy cycle complete"
        );
        Ok(result)
    }

    /// Approve a task from the pending, blocked or queued pool.
    ///
    /// The actor's approval satisfies approval requirements; forbidden
    /// actions and unsafe engine verdicts still block. Returns `None` for
    /// an unknown id or a task in a terminal pool.
    pub async fn approve_task(&self, id: &TaskId, actor: &str) -> Option<AutonomyTask> {
        let snapshot = {
            let state = self.state.lock().await;
            match state.pools.locate(id) {
                Some(kind) if PoolKind::APPROVABLE.contains(&kind) => state.pools.get(id).cloned(),
                _ => None,
            }
        }?;

        if snapshot.status == AutonomyTaskStatus::Running {
            warn!(task = %id, "Task already running, approval ignored");
            self.audit_task(&snapshot, "approve", Some(actor), AuditOutcome::Refused);
            return Some(snapshot);
        }

        let check = self.judge(&snapshot, Some(actor)).await;
        let step = if !check.safe_to_proceed {
            ApprovalStep::Blocked
        } else if snapshot.input.simulate_only() {
            ApprovalStep::Simulated
        } else {
            ApprovalStep::Execute
        };

        let now = current_timestamp();
        let mut applied = false;
        let moved = {
            let mut state = self.state.lock().await;
            state.pools.update_in(id, &PoolKind::APPROVABLE, |task| {
                // Another approval started it while the judges ran
                if task.status == AutonomyTaskStatus::Running {
                    return;
                }
                applied = true;
                task.governance = Some(check);
                match step {
                    ApprovalStep::Blocked => task.set_status(AutonomyTaskStatus::Blocked, now),
                    ApprovalStep::Simulated => {
                        task.result = Some(TaskOutcome::simulated(format!(
                            "Simulated: {}",
                            task.goal
                        )));
                        task.set_status(AutonomyTaskStatus::Completed, now);
                    }
                    ApprovalStep::Execute => task.set_status(AutonomyTaskStatus::Running, now),
                }
            })
        }?;

        if !applied {
            warn!(task = %id, "Task already running, approval ignored");
            self.audit_task(&moved, "approve", Some(actor), AuditOutcome::Refused);
            return Some(moved);
        }

        let finished = match step {
            ApprovalStep::Execute => self.execute(moved).await,
            ApprovalStep::Blocked | ApprovalStep::Simulated => moved,
        };

        let outcome = if finished.status == AutonomyTaskStatus::Blocked {
            AuditOutcome::Refused
        } else {
            AuditOutcome::Applied
        };
        info!(task = %finished.id, status = %finished.status, actor = actor, "Task approval processed");
        self.audit_task(&finished, "approve", Some(actor), outcome);
        Some(finished)
    }

    /// Hand a RUNNING task to the executor and file the result
    async fn execute(&self, running: AutonomyTask) -> AutonomyTask {
        let result = self.executor.execute(&running).await;

        let now = current_timestamp();
        let (status, outcome) = match result {
            Ok(outcome) => (AutonomyTaskStatus::Completed, outcome),
            Err(e) => {
                warn!(task = %running.id, engine = %running.target_engine, "Executor failed: {}", e);
                (
                    AutonomyTaskStatus::Blocked,
                    TaskOutcome::failure(format!("Execution failed: {e}")),
                )
            }
        };

        let mut state = self.state.lock().await;
        let updated = state
            .pools
            .update_in(&running.id, &[PoolKind::QueuedRunning], |task| {
                task.result = Some(outcome.clone());
                task.set_status(status, now);
            });
        drop(state);

        updated.unwrap_or_else(|| {
            // Removed while the executor ran; report the result on the snapshot
            let mut task = running;
            task.result = Some(outcome);
            task.set_status(status, now);
            task
        })
    }

    /// Reject a pending task. Returns `None` unless it is in the pending pool.
    pub async fn reject_task(&self, id: &TaskId, reason: &str) -> Option<AutonomyTask> {
        let now = current_timestamp();
        let mut state = self.state.lock().await;
        let rejected = state.pools.update_in(id, &[PoolKind::Pending], |task| {
            task.result = Some(TaskOutcome::rejected(reason));
            task.set_status(AutonomyTaskStatus::Rejected, now);
        });
        let existing = match &rejected {
            Some(_) => None,
            None => state.pools.get(id).cloned(),
        };
        drop(state);

        match (&rejected, existing) {
            (Some(task), _) => {
                info!(task = %task.id, "Task rejected");
                self.audit_task(task, "reject", None, AuditOutcome::Applied);
            }
            (None, Some(task)) => {
                warn!(task = %task.id, status = %task.status, "Task rejection refused");
                self.audit_task(&task, "reject", None, AuditOutcome::Refused);
            }
            (None, None) => {}
        }
        rejected
    }

    /// Counts per status plus the most recent plan
    pub async fn get_status(&self) -> StatusSnapshot {
        let state = self.state.lock().await;
        StatusSnapshot {
            counts: state.pools.counts(),
            last_plan: state.last_plan.clone(),
            last_cycle_at_ms: state.last_cycle_at_ms,
        }
    }

    /// Pending tasks in insertion order, filtered then sliced
    pub async fn get_pending(&self, filters: &PendingFilters) -> Vec<AutonomyTask> {
        let state = self.state.lock().await;
        state
            .pools
            .pending_page(filters, self.params.default_page_size)
    }

    pub async fn get_task(&self, id: &TaskId) -> Option<AutonomyTask> {
        self.state.lock().await.pools.get(id).cloned()
    }

    fn audit_task(&self, task: &AutonomyTask, action: &str, actor: Option<&str>, outcome: AuditOutcome) {
        let mut entry = AuditEntry::new(AuditKind::Task, task.id.as_str(), action, outcome)
            .with_detail(json!({
                "status": task.status,
                "targetEngine": task.target_engine,
                "governance": task.governance,
                "result": task.result,
            }));
        if let Some(actor) = actor {
            entry = entry.with_actor(actor);
        }
        record(self.audit.as_ref(), entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::audit_log::testing::RecordingAudit;
    use crate::ports::governance_engine::GovernanceEngineError;
    use crate::ports::task_executor::ExecutorError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use steward_domain::{ACTION_KEY, PlannedTask, Playbook, SIMULATE_ONLY_KEY, Severity, TaskPayload};

    // ==================== Test Doubles ====================

    struct FixedPlanner {
        tasks: Vec<PlannedTask>,
    }

    #[async_trait]
    impl OpportunityPlanner for FixedPlanner {
        async fn plan(&self, _options: &CycleOptions) -> Result<Vec<PlannedTask>, PlannerError> {
            Ok(self.tasks.clone())
        }
    }

    struct FailingPlanner;

    #[async_trait]
    impl OpportunityPlanner for FailingPlanner {
        async fn plan(&self, _options: &CycleOptions) -> Result<Vec<PlannedTask>, PlannerError> {
            Err(PlannerError::Unavailable("detector offline".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingExecutor {
        calls: AtomicUsize,
        fail: bool,
    }

    impl RecordingExecutor {
        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TaskExecutorPort for RecordingExecutor {
        async fn execute(&self, task: &AutonomyTask) -> Result<TaskOutcome, ExecutorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ExecutorError::Failed("engine rejected payload".to_string()))
            } else {
                Ok(TaskOutcome::success(format!("Done: {}", task.goal)))
            }
        }
    }

    enum StubVerdict {
        Safe,
        Unsafe,
        Error,
    }

    struct StubEngine {
        verdict: StubVerdict,
    }

    #[async_trait]
    impl GovernanceEngine for StubEngine {
        async fn evaluate(
            &self,
            _task: &AutonomyTask,
            _actor: Option<&str>,
        ) -> Result<Option<AutonomyGovernanceCheck>, GovernanceEngineError> {
            match self.verdict {
                StubVerdict::Safe => Ok(Some(AutonomyGovernanceCheck::safe().with_note("engine ok"))),
                StubVerdict::Unsafe => Ok(Some(AutonomyGovernanceCheck::violated(vec![
                    "Budget exceeded".to_string(),
                ]))),
                StubVerdict::Error => Err(GovernanceEngineError::Unavailable("timeout".to_string())),
            }
        }
    }

    fn guardrails() -> PlaybookGuardrails {
        PlaybookGuardrails::compile(vec![
            Playbook::new("catalog").forbid(r"delete\s+all"),
            Playbook::new("pricing").with_approval_required(),
        ])
        .unwrap()
    }

    fn safe_task() -> PlannedTask {
        PlannedTask::new("Refresh product photos", "catalog", "maintenance").with_playbook("catalog")
    }

    fn approval_task() -> PlannedTask {
        PlannedTask::new("Adjust weekend prices", "pricing", "growth").with_playbook("pricing")
    }

    fn forbidden_task() -> PlannedTask {
        PlannedTask::new("Clean catalog", "catalog", "maintenance")
            .with_playbook("catalog")
            .with_input(TaskPayload::new().with(ACTION_KEY, "delete all discontinued items"))
    }

    fn service(
        tasks: Vec<PlannedTask>,
        executor: Arc<RecordingExecutor>,
    ) -> AutonomyService<FixedPlanner, RecordingExecutor> {
        AutonomyService::new(Arc::new(FixedPlanner { tasks }), executor).with_guardrails(guardrails())
    }

    async fn only_task(
        service: &AutonomyService<FixedPlanner, RecordingExecutor>,
        result: &CycleResult,
    ) -> AutonomyTask {
        service.get_task(&result.task_ids[0]).await.unwrap()
    }

    // ==================== Cycle ====================

    #[tokio::test]
    async fn test_cycle_routes_tasks() {
        let svc = service(
            vec![safe_task(), approval_task(), forbidden_task()],
            Arc::new(RecordingExecutor::default()),
        );
        let result = svc.run_cycle(CycleOptions::default()).await.unwrap();

        assert_eq!(result.planned, 3);
        assert_eq!((result.queued, result.pending, result.blocked), (1, 1, 1));

        let status = svc.get_status().await;
        assert_eq!(status.counts.queued, 1);
        assert_eq!(status.counts.pending, 1);
        assert_eq!(status.counts.blocked, 1);
        assert_eq!(status.last_plan.unwrap().entries.len(), 3);

        let blocked = svc.get_task(&result.task_ids[2]).await.unwrap();
        assert_eq!(blocked.status, AutonomyTaskStatus::Blocked);
        assert!(!blocked.governance.unwrap().safe_to_proceed);
    }

    #[tokio::test]
    async fn test_dry_run_leaves_pools_untouched() {
        let svc = service(vec![safe_task(), approval_task()], Arc::new(RecordingExecutor::default()));
        let result = svc.run_cycle(CycleOptions::default().dry_run()).await.unwrap();

        assert!(result.dry_run);
        assert_eq!(result.planned, 2);
        let status = svc.get_status().await;
        assert_eq!(status.counts.total(), 0);
        assert!(status.last_plan.unwrap().dry_run);
        assert!(status.last_cycle_at_ms.is_some());
    }

    #[tokio::test]
    async fn test_max_tasks_and_brand_default() {
        let svc = service(vec![safe_task(), safe_task(), safe_task()], Arc::new(RecordingExecutor::default()));
        let result = svc
            .run_cycle(CycleOptions::for_brand("acme").with_max_tasks(2))
            .await
            .unwrap();

        assert_eq!(result.planned, 2);
        let task = only_task(&svc, &result).await;
        assert_eq!(task.brand_id.as_deref(), Some("acme"));
    }

    #[tokio::test]
    async fn test_planner_error_propagates() {
        let svc = AutonomyService::new(Arc::new(FailingPlanner), Arc::new(RecordingExecutor::default()));
        let err = svc.run_cycle(CycleOptions::default()).await.unwrap_err();
        assert!(matches!(err, AutonomyError::Planner(_)));
        assert!(svc.get_status().await.last_plan.is_none());
    }

    #[tokio::test]
    async fn test_engine_verdicts_merge_fail_closed() {
        for (verdict, expected) in [
            (StubVerdict::Safe, AutonomyTaskStatus::Queued),
            (StubVerdict::Unsafe, AutonomyTaskStatus::Blocked),
            (StubVerdict::Error, AutonomyTaskStatus::Blocked),
        ] {
            let svc = service(vec![safe_task()], Arc::new(RecordingExecutor::default()))
                .with_governance_engine(Arc::new(StubEngine { verdict }));
            let result = svc.run_cycle(CycleOptions::default()).await.unwrap();
            assert_eq!(only_task(&svc, &result).await.status, expected);
        }
    }

    #[tokio::test]
    async fn test_engine_note_preferred() {
        let svc = service(vec![safe_task()], Arc::new(RecordingExecutor::default()))
            .with_governance_engine(Arc::new(StubEngine {
                verdict: StubVerdict::Safe,
            }));
        let result = svc.run_cycle(CycleOptions::default()).await.unwrap();
        let check = only_task(&svc, &result).await.governance.unwrap();
        assert_eq!(check.note.as_deref(), Some("engine ok"));
    }

    // ==================== Approve ====================

    #[tokio::test]
    async fn test_approve_queued_executes() {
        let executor = Arc::new(RecordingExecutor::default());
        let svc = service(vec![safe_task()], executor.clone());
        let result = svc.run_cycle(CycleOptions::default()).await.unwrap();

        let task = svc.approve_task(&result.task_ids[0], "ops-lead").await.unwrap();

        assert_eq!(task.status, AutonomyTaskStatus::Completed);
        assert_eq!(executor.calls(), 1);
        assert!(task.result.unwrap().success);
        assert_eq!(svc.get_status().await.counts.completed, 1);
    }

    #[tokio::test]
    async fn test_approve_pending_satisfies_approval() {
        let executor = Arc::new(RecordingExecutor::default());
        let svc = service(vec![approval_task()], executor.clone());
        let result = svc.run_cycle(CycleOptions::default()).await.unwrap();
        assert_eq!(result.pending, 1);

        let task = svc.approve_task(&result.task_ids[0], "cfo").await.unwrap();
        assert_eq!(task.status, AutonomyTaskStatus::Completed);
        assert_eq!(executor.calls(), 1);
    }

    #[tokio::test]
    async fn test_simulate_only_skips_executor() {
        let executor = Arc::new(RecordingExecutor::default());
        let planned = approval_task().with_input(TaskPayload::new().with(SIMULATE_ONLY_KEY, true));
        let svc = service(vec![planned], executor.clone());
        let result = svc.run_cycle(CycleOptions::default()).await.unwrap();

        let task = svc.approve_task(&result.task_ids[0], "cfo").await.unwrap();

        assert_eq!(task.status, AutonomyTaskStatus::Completed);
        assert!(task.result.unwrap().simulated);
        assert_eq!(executor.calls(), 0);
    }

    #[tokio::test]
    async fn test_simulate_only_unreachable_when_unsafe() {
        let executor = Arc::new(RecordingExecutor::default());
        let planned = PlannedTask::new("Clean catalog", "catalog", "maintenance")
            .with_playbook("catalog")
            .with_input(
                TaskPayload::new()
                    .with(ACTION_KEY, "delete all listings")
                    .with(SIMULATE_ONLY_KEY, true),
            );
        let svc = service(vec![planned], executor.clone());
        let result = svc.run_cycle(CycleOptions::default()).await.unwrap();

        let task = svc.approve_task(&result.task_ids[0], "ops-lead").await.unwrap();

        assert_eq!(task.status, AutonomyTaskStatus::Blocked);
        assert!(task.result.is_none());
        assert_eq!(executor.calls(), 0);
    }

    #[tokio::test]
    async fn test_executor_failure_blocks() {
        let executor = Arc::new(RecordingExecutor::failing());
        let svc = service(vec![safe_task()], executor.clone());
        let result = svc.run_cycle(CycleOptions::default()).await.unwrap();

        let task = svc.approve_task(&result.task_ids[0], "ops-lead").await.unwrap();

        assert_eq!(task.status, AutonomyTaskStatus::Blocked);
        let outcome = task.result.unwrap();
        assert!(!outcome.success);
        assert!(outcome.summary.starts_with("Execution failed"));
        assert_eq!(svc.get_status().await.counts.blocked, 1);
    }

    #[tokio::test]
    async fn test_approve_terminal_or_unknown_is_none() {
        let svc = service(vec![safe_task()], Arc::new(RecordingExecutor::default()));
        let result = svc.run_cycle(CycleOptions::default()).await.unwrap();
        let id = &result.task_ids[0];

        svc.approve_task(id, "ops-lead").await.unwrap();
        assert!(svc.approve_task(id, "ops-lead").await.is_none());
        assert!(svc.approve_task(&TaskId::new("ghost"), "ops-lead").await.is_none());
    }

    // ==================== Reject ====================

    #[tokio::test]
    async fn test_reject_only_from_pending() {
        let audit = Arc::new(RecordingAudit::default());
        let executor = Arc::new(RecordingExecutor::default());
        let svc = service(vec![approval_task(), safe_task()], executor.clone())
            .with_audit_log(audit.clone());
        let result = svc.run_cycle(CycleOptions::default()).await.unwrap();
        let (pending_id, queued_id) = (&result.task_ids[0], &result.task_ids[1]);

        let rejected = svc.reject_task(pending_id, "off-season").await.unwrap();
        assert_eq!(rejected.status, AutonomyTaskStatus::Rejected);
        let outcome = rejected.result.unwrap();
        assert_eq!(outcome.summary, "Rejected: off-season");
        assert!(!outcome.success);

        assert!(svc.reject_task(queued_id, "no").await.is_none());
        assert_eq!(
            svc.get_task(queued_id).await.unwrap().status,
            AutonomyTaskStatus::Queued
        );
        assert!(svc.reject_task(pending_id, "again").await.is_none());
        assert_eq!(executor.calls(), 0);

        let refused = audit.entries_for(queued_id.as_str()).unwrap();
        assert_eq!(refused.len(), 1);
        assert_eq!(refused[0].outcome, AuditOutcome::Refused);
    }

    // ==================== Status & listing ====================

    #[tokio::test]
    async fn test_get_pending_filters_and_pages() {
        let tasks = vec![
            approval_task().with_severity(Severity::High).with_brand("a"),
            approval_task().with_severity(Severity::Low).with_brand("a"),
            approval_task().with_severity(Severity::High).with_brand("b"),
            approval_task().with_severity(Severity::High).with_brand("a"),
        ];
        let svc = service(tasks, Arc::new(RecordingExecutor::default()))
            .with_params(AutonomyParams {
                default_page_size: 2,
            });
        let result = svc.run_cycle(CycleOptions::default()).await.unwrap();

        let all = svc.get_pending(&PendingFilters::default()).await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, result.task_ids[0]);

        let high_a = PendingFilters {
            severity: Some(Severity::High),
            brand_id: Some("a".to_string()),
            ..Default::default()
        };
        let page = svc.get_pending(&high_a).await;
        assert_eq!(
            page.iter().map(|t| t.id.clone()).collect::<Vec<_>>(),
            vec![result.task_ids[0].clone(), result.task_ids[3].clone()]
        );

        let second = PendingFilters {
            offset: 1,
            ..high_a
        };
        assert_eq!(svc.get_pending(&second).await[0].id, result.task_ids[3]);
    }

    #[tokio::test]
    async fn test_instances_do_not_share_state() {
        let a = service(vec![safe_task()], Arc::new(RecordingExecutor::default()));
        let b = service(vec![safe_task()], Arc::new(RecordingExecutor::default()));
        a.run_cycle(CycleOptions::default()).await.unwrap();
        assert_eq!(a.get_status().await.counts.total(), 1);
        assert_eq!(b.get_status().await.counts.total(), 0);
    }
}
