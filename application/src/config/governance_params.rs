//! Governance configuration container.
//!
//! [`GovernanceParams`] groups the per-component parameters so the
//! composition root can hand each use case the slice it needs.
//!
//! | Type | Composer | Authority | Governor | Orchestrator |
//! |------|----------|-----------|----------|--------------|
//! | `AdvisoryParams` | Yes | No | No | No |
//! | `DecisionParams` | No | Yes | No | No |
//! | `AutonomyParams` | No | No | No | Yes |
//!
//! The governor takes no parameters: its constraints are fixed.

use super::params::{AdvisoryParams, AutonomyParams, DecisionParams};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GovernanceParams {
    advisory: AdvisoryParams,
    decision: DecisionParams,
    autonomy: AutonomyParams,
}

impl GovernanceParams {
    pub fn new(advisory: AdvisoryParams, decision: DecisionParams, autonomy: AutonomyParams) -> Self {
        Self {
            advisory,
            decision,
            autonomy,
        }
    }

    pub fn advisory(&self) -> &AdvisoryParams {
        &self.advisory
    }

    pub fn decision(&self) -> DecisionParams {
        self.decision
    }

    pub fn autonomy(&self) -> AutonomyParams {
        self.autonomy
    }
}
