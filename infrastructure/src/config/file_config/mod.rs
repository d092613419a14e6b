//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod advisory;
mod audit;
mod governance;
mod limits;

pub use advisory::FileAdvisoryConfig;
pub use audit::FileAuditConfig;
pub use governance::FileGovernanceConfig;
pub use limits::{FileAutonomyConfig, FileDecisionConfig};

use super::issue::{ConfigIssue, ConfigIssueCode};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use steward_application::GovernanceParams;
use steward_domain::{DomainError, Playbook, PlaybookGuardrails};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Advisory session composer settings
    pub advisory: FileAdvisoryConfig,
    /// Decision authority settings
    pub decision: FileDecisionConfig,
    /// Autonomy orchestrator settings
    pub autonomy: FileAutonomyConfig,
    /// Rules for the built-in governance engine
    pub governance: FileGovernanceConfig,
    /// Playbook guardrails (`[[playbooks]]` tables)
    pub playbooks: Vec<Playbook>,
    /// Audit trail sink
    pub audit: FileAuditConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Zero caps and page sizes
    /// 2. Enum parse failures (`governance.max_auto_severity`)
    /// 3. Playbook names and forbidden-action patterns
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Caps
        issues.extend(self.advisory.validate());
        issues.extend(self.decision.validate());
        issues.extend(self.autonomy.validate());

        // 2. Enum parse validation
        issues.extend(self.governance.parse_max_auto_severity().1);

        // 3. Playbooks
        let mut seen = HashSet::new();
        for playbook in &self.playbooks {
            if playbook.name.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyPlaybookName,
                    "playbooks: a playbook has an empty name",
                ));
            } else if !seen.insert(playbook.name.as_str()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicatePlaybook {
                        name: playbook.name.clone(),
                    },
                    format!(
                        "playbooks: '{}' is declared more than once, the first declaration is used",
                        playbook.name
                    ),
                ));
            }

            for pattern in &playbook.forbidden_actions {
                if let Err(e) = RegexBuilder::new(pattern).case_insensitive(true).build() {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::InvalidPattern {
                            playbook: playbook.name.clone(),
                            pattern: pattern.clone(),
                        },
                        format!(
                            "playbooks.{}: invalid forbidden_actions pattern '{}': {}",
                            playbook.name, pattern, e
                        ),
                    ));
                }
            }
        }

        issues
    }

    /// Application parameters for every use case.
    pub fn to_governance_params(&self) -> GovernanceParams {
        GovernanceParams::new(
            self.advisory.to_params(),
            self.decision.to_params(),
            self.autonomy.to_params(),
        )
    }

    /// Compile the declared playbooks.
    pub fn playbook_guardrails(&self) -> Result<PlaybookGuardrails, DomainError> {
        PlaybookGuardrails::compile(self.playbooks.clone())
    }
}
