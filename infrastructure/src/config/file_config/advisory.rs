//! Advisory configuration from TOML (`[advisory]` section)

use crate::config::issue::{ConfigIssue, ConfigIssueCode, zero_value};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use steward_application::AdvisoryParams;
use steward_domain::AggregationLimits;
use steward_domain::advisory::question::MAX_AGENTS;

/// Raw advisory session configuration from TOML
///
/// # Example
///
/// ```toml
/// [advisory]
/// session_ttl_secs = 86400
/// default_agents = ["growth", "finance"]
/// max_cross_insights = 10
/// insight_max_len = 200
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAdvisoryConfig {
    /// How long a session record stays retrievable, in seconds
    pub session_ttl_secs: u64,
    /// Agents consulted when a question names none
    pub default_agents: Vec<String>,
    pub max_cross_insights: usize,
    /// Maximum characters kept from a normalized recommendation
    pub insight_max_len: usize,
}

impl Default for FileAdvisoryConfig {
    fn default() -> Self {
        let limits = AggregationLimits::default();
        Self {
            session_ttl_secs: 86_400,
            default_agents: vec!["generalist".to_string()],
            max_cross_insights: limits.max_cross_insights,
            insight_max_len: limits.insight_max_len,
        }
    }
}

impl FileAdvisoryConfig {
    pub fn to_params(&self) -> AdvisoryParams {
        AdvisoryParams::default()
            .with_default_agents(self.default_agents.clone())
            .with_limits(AggregationLimits {
                max_cross_insights: self.max_cross_insights,
                insight_max_len: self.insight_max_len,
            })
            .with_session_ttl(Duration::from_secs(self.session_ttl_secs))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.session_ttl_secs == 0 {
            issues.push(zero_value("advisory.session_ttl_secs"));
        }
        if self.max_cross_insights == 0 {
            issues.push(zero_value("advisory.max_cross_insights"));
        }
        if self.insight_max_len == 0 {
            issues.push(zero_value("advisory.insight_max_len"));
        }
        if self.default_agents.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroValue {
                    field: "advisory.default_agents".to_string(),
                },
                "advisory.default_agents: must name at least one agent",
            ));
        } else if self.default_agents.len() > MAX_AGENTS {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TooManyDefaultAgents {
                    count: self.default_agents.len(),
                    max: MAX_AGENTS,
                },
                format!(
                    "advisory.default_agents: {} agents configured, at most {} allowed",
                    self.default_agents.len(),
                    MAX_AGENTS
                ),
            ));
        }

        issues
    }
}
