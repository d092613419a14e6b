//! Audit trail entries
//!
//! Audit is observability, not authorization: an entry records what a
//! component did, and a failed write never rolls back the transition it
//! describes.

use serde::{Deserialize, Serialize};

/// Which kind of subject an entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditKind {
    Decision,
    Intent,
    Task,
}

impl AuditKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditKind::Decision => "decision",
            AuditKind::Intent => "intent",
            AuditKind::Task => "task",
        }
    }
}

/// Whether the audited operation changed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    Applied,
    Refused,
}

/// One append-only audit record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Id of the decision, intent or task
    pub subject_id: String,
    pub kind: AuditKind,
    /// Operation name, e.g. "classify", "create", "approve"
    pub action: String,
    pub actor: Option<String>,
    pub outcome: AuditOutcome,
    /// Operation-specific details
    pub detail: serde_json::Value,
    /// Milliseconds since epoch
    pub timestamp_ms: u64,
}

impl AuditEntry {
    pub fn new(
        kind: AuditKind,
        subject_id: impl Into<String>,
        action: impl Into<String>,
        outcome: AuditOutcome,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            kind,
            action: action.into(),
            actor: None,
            outcome,
            detail: serde_json::Value::Null,
            timestamp_ms: crate::core::time::current_timestamp(),
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.detail = detail;
        self
    }

    /// Event type string used by structured log writers, e.g. "intent.approve"
    pub fn event_type(&self) -> String {
        format!("{}.{}", self.kind.as_str(), self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_builder() {
        let entry = AuditEntry::new(AuditKind::Intent, "i-1", "approve", AuditOutcome::Refused)
            .with_actor("bob")
            .with_detail(serde_json::json!({"reason": "blocked"}));
        assert_eq!(entry.event_type(), "intent.approve");
        assert_eq!(entry.actor.as_deref(), Some("bob"));
        assert_eq!(entry.detail["reason"], "blocked");
    }

    #[test]
    fn test_entry_serialization() {
        let entry = AuditEntry::new(AuditKind::Decision, "d-1", "classify", AuditOutcome::Applied);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["kind"], "decision");
        assert_eq!(value["outcome"], "applied");
    }
}
