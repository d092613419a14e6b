//! Per-component parameters.
//!
//! These are application-layer concerns, not domain policy: they tune caps
//! and defaults, never the risk lookup or the fail-closed merge.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use steward_domain::AggregationLimits;
use steward_domain::decision::DEFAULT_MAX_SUPPORTING_AGENTS;

/// Default retention of advisory session records (24 hours)
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Advisory session composer parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryParams {
    /// Agents consulted when a question names none
    pub default_agents: Vec<String>,
    pub limits: AggregationLimits,
    /// How long a session record stays retrievable
    pub session_ttl: Duration,
}

impl Default for AdvisoryParams {
    fn default() -> Self {
        Self {
            default_agents: vec!["generalist".to_string()],
            limits: AggregationLimits::default(),
            session_ttl: DEFAULT_SESSION_TTL,
        }
    }
}

impl AdvisoryParams {
    // ==================== Builder Methods ====================

    pub fn with_default_agents(mut self, agents: Vec<String>) -> Self {
        self.default_agents = agents;
        self
    }

    pub fn with_limits(mut self, limits: AggregationLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionParams {
    pub max_supporting_agents: usize,
}

impl Default for DecisionParams {
    fn default() -> Self {
        Self {
            max_supporting_agents: DEFAULT_MAX_SUPPORTING_AGENTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutonomyParams {
    /// `limit` applied to pending listings that do not set one
    pub default_page_size: usize,
}

impl Default for AutonomyParams {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
