//! Configuration-driven governance engine.
//!
//! Rules are evaluated independently and their findings combined:
//!
//! | Rule | Without approver | With approver |
//! |------|------------------|---------------|
//! | target engine in `blocked_engines` | violation | violation |
//! | target engine in `approval_engines` | awaits `engine-owner` | safe |
//! | severity above `max_auto_severity` | awaits `severity-review` | safe |
//!
//! When no rule applies the engine has no opinion and returns `Ok(None)`.

use crate::config::{ConfigIssue, FileGovernanceConfig};
use async_trait::async_trait;
use steward_application::{GovernanceEngine, GovernanceEngineError};
use steward_domain::{AutonomyGovernanceCheck, AutonomyTask, Severity};
use tracing::debug;

pub const ENGINE_OWNER_APPROVAL: &str = "engine-owner";
pub const SEVERITY_REVIEW_APPROVAL: &str = "severity-review";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GovernanceRules {
    pub blocked_engines: Vec<String>,
    pub approval_engines: Vec<String>,
    pub max_auto_severity: Option<Severity>,
}

impl GovernanceRules {
    /// Rules from the `[governance]` section, with any parse issues
    pub fn from_config(config: &FileGovernanceConfig) -> (Self, Vec<ConfigIssue>) {
        let (max_auto_severity, issues) = config.parse_max_auto_severity();
        (
            Self {
                blocked_engines: config.blocked_engines.clone(),
                approval_engines: config.approval_engines.clone(),
                max_auto_severity,
            },
            issues,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.blocked_engines.is_empty()
            && self.approval_engines.is_empty()
            && self.max_auto_severity.is_none()
    }
}

pub struct RuleBasedGovernanceEngine {
    rules: GovernanceRules,
}

impl RuleBasedGovernanceEngine {
    pub fn new(rules: GovernanceRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &GovernanceRules {
        &self.rules
    }

    fn judge(&self, task: &AutonomyTask, actor: Option<&str>) -> Option<AutonomyGovernanceCheck> {
        let engine = task.target_engine.as_str();
        let mut applied = false;
        let mut check = AutonomyGovernanceCheck::safe();

        if self.rules.blocked_engines.iter().any(|e| e == engine) {
            applied = true;
            check.safe_to_proceed = false;
            check
                .violations
                .push(format!("Engine '{engine}' is blocked by policy"));
        }

        let mut gates = Vec::new();
        if self.rules.approval_engines.iter().any(|e| e == engine) {
            gates.push(ENGINE_OWNER_APPROVAL);
        }
        if let Some(max) = self.rules.max_auto_severity
            && task.severity > max
        {
            gates.push(SEVERITY_REVIEW_APPROVAL);
        }
        for gate in gates {
            applied = true;
            check = check.with_required_approval(gate);
            if actor.is_none() {
                check.safe_to_proceed = false;
            }
        }

        if !applied {
            return None;
        }

        let note = if !check.violations.is_empty() {
            "Rejected by engine policy"
        } else if check.safe_to_proceed {
            "Approved by policy rules"
        } else {
            "Awaiting approval per policy rules"
        };
        Some(check.with_note(note))
    }
}

#[async_trait]
impl GovernanceEngine for RuleBasedGovernanceEngine {
    async fn evaluate(
        &self,
        task: &AutonomyTask,
        actor: Option<&str>,
    ) -> Result<Option<AutonomyGovernanceCheck>, GovernanceEngineError> {
        let verdict = self.judge(task, actor);
        debug!(
            task = %task.id,
            engine = %task.target_engine,
            opinion = verdict.is_some(),
            safe = verdict.as_ref().is_none_or(|c| c.safe_to_proceed),
            "Policy rules evaluated"
        );
        Ok(verdict)
    }
}
