//! Opportunity planner port
//!
//! The detector and planner that propose autonomy tasks for a cycle.

use async_trait::async_trait;
use steward_domain::{CycleOptions, PlannedTask};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Planner I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    #[error("Planner unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait OpportunityPlanner: Send + Sync {
    /// Propose tasks for one cycle, in priority order
    async fn plan(&self, options: &CycleOptions) -> Result<Vec<PlannedTask>, PlannerError>;
}
