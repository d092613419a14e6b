//! Rule-based governance configuration from TOML (`[governance]` section)

use crate::config::issue::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use steward_domain::Severity;

/// Raw governance engine rules from TOML
///
/// # Example
///
/// ```toml
/// [governance]
/// blocked_engines = ["payments"]
/// approval_engines = ["pricing"]
/// max_auto_severity = "medium"   # tasks above this need a human
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGovernanceConfig {
    /// Engines no task may target
    pub blocked_engines: Vec<String>,
    /// Engines whose tasks always need a human approval
    pub approval_engines: Vec<String>,
    /// Highest severity that may proceed without approval
    pub max_auto_severity: Option<String>,
}

impl FileGovernanceConfig {
    /// Parse `max_auto_severity`, returning an error issue on failure.
    ///
    /// An unparseable value falls back to `low` so that every task above
    /// it waits for a human.
    pub fn parse_max_auto_severity(&self) -> (Option<Severity>, Vec<ConfigIssue>) {
        let Some(raw) = self.max_auto_severity.as_deref() else {
            return (None, vec![]);
        };
        match raw.parse::<Severity>() {
            Ok(severity) => (Some(severity), vec![]),
            Err(_) => {
                let issue = ConfigIssue::error(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "governance.max_auto_severity".to_string(),
                        value: raw.to_string(),
                        valid_values: vec![
                            "low".to_string(),
                            "medium".to_string(),
                            "high".to_string(),
                            "critical".to_string(),
                        ],
                    },
                    format!(
                        "governance.max_auto_severity: unknown value '{raw}', falling back to 'low'"
                    ),
                );
                (Some(Severity::Low), vec![issue])
            }
        }
    }
}
