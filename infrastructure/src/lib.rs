//! Infrastructure layer for steward
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod advisors;
pub mod config;
pub mod executor;
pub mod logging;
pub mod planner;
pub mod policy;
pub mod store;

// Re-export commonly used types
pub use advisors::{AdvisorProfile, HeuristicAdvisor, Stance};
pub use config::{
    ConfigError, ConfigIssue, ConfigIssueCode, ConfigLoader, FileAdvisoryConfig, FileAuditConfig,
    FileAutonomyConfig, FileConfig, FileDecisionConfig, FileGovernanceConfig, Severity,
};
pub use executor::DryRunExecutor;
pub use logging::JsonlAuditLog;
pub use planner::JsonFilePlanner;
pub use policy::{GovernanceRules, RuleBasedGovernanceEngine};
pub use store::{Clock, InMemoryAuditLog, InMemoryIntentRepository, InMemorySessionStore};
