//! Domain layer for steward
//!
//! This crate contains the entities, value objects and deterministic
//! algorithms of the decision-governance pipeline. It performs no I/O and
//! has no dependencies on infrastructure or presentation concerns.
//!
//! # Pipeline
//!
//! ```text
//! ┌────────────────────┐   ┌────────────────────┐   ┌──────────────────────┐
//! │  Advisory Session  │ → │ Decision Authority │ → │ Execution Intent     │
//! │  (merge answers)   │   │ (risk → status)    │   │ (non-exec envelope)  │
//! └────────────────────┘   └────────────────────┘   └──────────────────────┘
//!
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  Autonomy Tasks: playbook guardrails ∧ governance engine (fail-closed)│
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate executes, schedules or dispatches a side effect.
//! The most an approved intent produces is a [`HandoffPayload`] describing
//! what a future, external executor could do.

pub mod advisory;
pub mod audit;
pub mod autonomy;
pub mod core;
pub mod decision;
pub mod intent;

// Re-export commonly used types
pub use advisory::{
    AdvisoryQuestion, AdvisorySessionInput, AdvisorySessionMemoryRecord, AdvisorySessionOutput,
    AgentAnswer, AgentRecommendation, Conflict, CrossInsight, Explainability, QuestionHash,
    QuestionResult, SessionId, hash_question,
    aggregate::{AggregationLimits, AnsweredQuestion, aggregate_session},
    conflict::{ANTONYM_VERBS, detect_conflicts},
    normalize::normalize_recommendation,
};
pub use audit::{AuditEntry, AuditKind, AuditOutcome};
pub use autonomy::{
    ACTION_KEY, AutonomyGovernanceCheck, AutonomyTask, AutonomyTaskStatus, CycleOptions, CyclePlan,
    CycleResult, PendingFilters, PlanEntry, PlannedTask, Playbook, PlaybookGuardrails,
    PoolCounts, PoolKind, SIMULATE_ONLY_KEY, Severity, StatusSnapshot, TaskId, TaskOutcome,
    TaskPayload, TaskPools, merge_governance,
};
pub use core::{
    error::{DomainError, ValidationError},
    time::{current_timestamp, new_id},
};
pub use decision::{
    Classification, DecisionId, DecisionObject, DecisionStatus, RiskLevel, classify_decision,
    status_for_risk,
};
pub use intent::{
    ADVISORY_BANNER, Approval, ApprovalStatus, ExecutionIntent, ExecutionPlan, HandoffPayload,
    IntentId, SafetyBlock, SafetyConstraints, normalize_plan,
};
