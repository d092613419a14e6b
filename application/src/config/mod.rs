//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`AdvisoryParams`]: default agents, aggregation caps, session retention
//! - [`DecisionParams`]: supporting-agent cap
//! - [`AutonomyParams`]: pending-list page size
//! - [`GovernanceParams`]: container handed to the composition root

pub mod governance_params;
pub mod params;

pub use governance_params::GovernanceParams;
pub use params::{AdvisoryParams, AutonomyParams, DecisionParams};
