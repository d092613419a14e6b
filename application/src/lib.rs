//! Application layer for steward
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AdvisoryParams, AutonomyParams, DecisionParams, GovernanceParams};
pub use ports::{
    advisory_agent::{AdvisoryAgent, AgentError, AgentQuery},
    advisory_progress::{AdvisoryProgress, NoProgress},
    audit_log::{AuditError, AuditLog, NoAuditLog},
    governance_engine::{GovernanceEngine, GovernanceEngineError, NoGovernanceEngine},
    intent_repository::{IntentRepository, IntentStoreError},
    planner::{OpportunityPlanner, PlannerError},
    session_store::{SessionStore, SessionStoreError},
    task_executor::{ExecutorError, TaskExecutorPort},
};
pub use use_cases::autonomy::{AutonomyError, AutonomyService};
pub use use_cases::decision_authority::DecisionAuthority;
pub use use_cases::execution_intent::{ExecutionIntentGovernor, IntentError};
pub use use_cases::run_advisory_session::{AdvisoryError, RunAdvisorySessionUseCase};
