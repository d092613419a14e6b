//! Autonomy task entities

use super::governance::AutonomyGovernanceCheck;
use super::payload::TaskPayload;
use crate::core::time::string_id;
use serde::{Deserialize, Serialize};

string_id!(
    /// Unique identifier of an autonomy task
    TaskId
);

/// Lifecycle status of an autonomy task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutonomyTaskStatus {
    #[default]
    Pending,
    Queued,
    Running,
    Completed,
    Blocked,
    Rejected,
}

impl AutonomyTaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AutonomyTaskStatus::Pending => "PENDING",
            AutonomyTaskStatus::Queued => "QUEUED",
            AutonomyTaskStatus::Running => "RUNNING",
            AutonomyTaskStatus::Completed => "COMPLETED",
            AutonomyTaskStatus::Blocked => "BLOCKED",
            AutonomyTaskStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AutonomyTaskStatus::Completed | AutonomyTaskStatus::Rejected
        )
    }
}

impl std::fmt::Display for AutonomyTaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of the opportunity or issue a task addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

/// Result attached to a finished task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub success: bool,
    pub summary: String,
    /// True when no executor was involved (simulation or rejection)
    pub simulated: bool,
    #[serde(default)]
    pub data: TaskPayload,
}

impl TaskOutcome {
    pub fn success(summary: impl Into<String>) -> Self {
        Self {
            success: true,
            summary: summary.into(),
            simulated: false,
            data: TaskPayload::new(),
        }
    }

    pub fn simulated(summary: impl Into<String>) -> Self {
        Self {
            success: true,
            summary: summary.into(),
            simulated: true,
            data: TaskPayload::new(),
        }
    }

    pub fn failure(summary: impl Into<String>) -> Self {
        Self {
            success: false,
            summary: summary.into(),
            simulated: false,
            data: TaskPayload::new(),
        }
    }

    /// Synthetic negative result; no executor is ever involved
    pub fn rejected(reason: &str) -> Self {
        Self {
            success: false,
            summary: format!("Rejected: {reason}"),
            simulated: true,
            data: TaskPayload::new(),
        }
    }

    pub fn with_data(mut self, data: TaskPayload) -> Self {
        self.data = data;
        self
    }
}

/// A task proposed by the detector/planner, before governance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedTask {
    pub goal: String,
    pub target_engine: String,
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub playbook: Option<String>,
    #[serde(default)]
    pub requires_approval: bool,
    #[serde(default)]
    pub input: TaskPayload,
}

impl PlannedTask {
    pub fn new(
        goal: impl Into<String>,
        target_engine: impl Into<String>,
        task_type: impl Into<String>,
    ) -> Self {
        Self {
            goal: goal.into(),
            target_engine: target_engine.into(),
            task_type: task_type.into(),
            severity: Severity::Low,
            brand_id: None,
            playbook: None,
            requires_approval: false,
            input: TaskPayload::new(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_brand(mut self, brand_id: impl Into<String>) -> Self {
        self.brand_id = Some(brand_id.into());
        self
    }

    pub fn with_playbook(mut self, playbook: impl Into<String>) -> Self {
        self.playbook = Some(playbook.into());
        self
    }

    pub fn with_approval_required(mut self) -> Self {
        self.requires_approval = true;
        self
    }

    pub fn with_input(mut self, input: TaskPayload) -> Self {
        self.input = input;
        self
    }
}

/// A coarse automated task tracked by the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomyTask {
    pub id: TaskId,
    pub goal: String,
    pub target_engine: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub severity: Severity,
    pub brand_id: Option<String>,
    pub playbook: Option<String>,
    pub requires_approval: bool,
    pub input: TaskPayload,
    pub status: AutonomyTaskStatus,
    pub governance: Option<AutonomyGovernanceCheck>,
    pub result: Option<TaskOutcome>,
    pub created_at_ms: u64,
    pub updated_at_ms: u64,
}

impl AutonomyTask {
    /// Create a PENDING task from a planned one
    pub fn from_plan(planned: PlannedTask, now: u64) -> Self {
        Self {
            id: TaskId::generate(),
            goal: planned.goal,
            target_engine: planned.target_engine,
            task_type: planned.task_type,
            severity: planned.severity,
            brand_id: planned.brand_id,
            playbook: planned.playbook,
            requires_approval: planned.requires_approval,
            input: planned.input,
            status: AutonomyTaskStatus::Pending,
            governance: None,
            result: None,
            created_at_ms: now,
            updated_at_ms: now,
        }
    }

    /// Texts the guardrails match against, each on its own: the goal,
    /// then the reserved action when present
    pub fn guarded_texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.goal.as_str()).chain(self.input.action())
    }

    pub fn set_status(&mut self, status: AutonomyTaskStatus, now: u64) {
        self.status = status;
        self.updated_at_ms = now;
    }
}
