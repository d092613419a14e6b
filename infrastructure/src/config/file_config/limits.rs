//! Decision and autonomy caps from TOML (`[decision]` and `[autonomy]` sections)

use crate::config::issue::{ConfigIssue, ConfigIssueCode, zero_value};
use serde::{Deserialize, Serialize};
use steward_application::config::{AutonomyParams, DecisionParams};

/// ```toml
/// [decision]
/// max_supporting_agents = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDecisionConfig {
    pub max_supporting_agents: usize,
}

impl Default for FileDecisionConfig {
    fn default() -> Self {
        Self {
            max_supporting_agents: DecisionParams::default().max_supporting_agents,
        }
    }
}

impl FileDecisionConfig {
    pub fn to_params(&self) -> DecisionParams {
        DecisionParams {
            max_supporting_agents: self.max_supporting_agents,
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.max_supporting_agents == 0 {
            return vec![ConfigIssue::warning(
                ConfigIssueCode::ZeroValue {
                    field: "decision.max_supporting_agents".to_string(),
                },
                "decision.max_supporting_agents: zero, any supporting agent is reported as an error",
            )];
        }
        Vec::new()
    }
}

/// ```toml
/// [autonomy]
/// default_page_size = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAutonomyConfig {
    /// Page size of pending listings that do not set a limit
    pub default_page_size: usize,
}

impl Default for FileAutonomyConfig {
    fn default() -> Self {
        Self {
            default_page_size: AutonomyParams::default().default_page_size,
        }
    }
}

impl FileAutonomyConfig {
    pub fn to_params(&self) -> AutonomyParams {
        AutonomyParams {
            default_page_size: self.default_page_size,
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.default_page_size == 0 {
            return vec![zero_value("autonomy.default_page_size")];
        }
        Vec::new()
    }
}
