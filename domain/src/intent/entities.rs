//! Execution intent entities

use super::plan::{ExecutionPlan, normalize_plan};
use crate::core::time::string_id;
use crate::decision::{DecisionId, DecisionObject, DecisionStatus, RiskLevel};
use serde::{Deserialize, Serialize};

string_id!(
    /// Unique identifier of an execution intent
    IntentId
);

/// Banner carried verbatim by every handoff payload.
///
/// Compliance tooling greps for this exact string; do not reword it.
pub const ADVISORY_BANNER: &str = "ADVISORY ONLY - NOT EXECUTED: this payload describes a proposed action for a future executor and performs no side effects.";

/// Human approval status of an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApprovalStatus::Pending => "PENDING",
            ApprovalStatus::Approved => "APPROVED",
            ApprovalStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ApprovalStatus::Pending)
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Approval record of an intent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub status: ApprovalStatus,
    pub decided_by: Option<String>,
    pub reason: Option<String>,
    pub decided_at: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConstraintFlags {
    execution_disabled: bool,
    no_external_dispatch: bool,
    no_scheduling: bool,
    human_approval_required: bool,
}

/// The non-execution envelope.
///
/// Every flag is `true` and there is no way to construct or deserialize
/// a value where any flag is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ConstraintFlags")]
pub struct SafetyConstraints {
    execution_disabled: bool,
    no_external_dispatch: bool,
    no_scheduling: bool,
    human_approval_required: bool,
}

impl SafetyConstraints {
    pub const LOCKED: SafetyConstraints = SafetyConstraints {
        execution_disabled: true,
        no_external_dispatch: true,
        no_scheduling: true,
        human_approval_required: true,
    };

    pub fn execution_disabled(&self) -> bool {
        self.execution_disabled
    }

    pub fn no_external_dispatch(&self) -> bool {
        self.no_external_dispatch
    }

    pub fn no_scheduling(&self) -> bool {
        self.no_scheduling
    }

    pub fn human_approval_required(&self) -> bool {
        self.human_approval_required
    }
}

impl Default for SafetyConstraints {
    fn default() -> Self {
        Self::LOCKED
    }
}

impl TryFrom<ConstraintFlags> for SafetyConstraints {
    type Error = String;

    fn try_from(flags: ConstraintFlags) -> Result<Self, Self::Error> {
        let all_set = flags.execution_disabled
            && flags.no_external_dispatch
            && flags.no_scheduling
            && flags.human_approval_required;
        if all_set {
            Ok(Self::LOCKED)
        } else {
            Err("safety constraints are fixed and must all be true".to_string())
        }
    }
}

/// Whether the intent is blocked from approval, and why
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyBlock {
    pub blocked: bool,
    pub reasons: Vec<String>,
}

/// A decision wrapped in a non-executable envelope awaiting approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionIntent {
    pub id: IntentId,
    pub decision_id: DecisionId,
    pub requested_by: String,
    pub scope: String,
    pub risk_level: RiskLevel,
    pub approval_required: bool,
    pub plan: ExecutionPlan,
    pub constraints: SafetyConstraints,
    pub safety: SafetyBlock,
    pub approval: Approval,
    pub created_at: u64,
}

impl ExecutionIntent {
    /// Wrap a decision.
    ///
    /// Risk and approval requirement are recomputed from the decision
    /// itself, so skipping classification cannot weaken the envelope.
    pub fn from_decision(
        decision: &DecisionObject,
        requested_by: &str,
        missing_prerequisites: &[String],
        now: u64,
    ) -> Self {
        let mut reasons = Vec::new();
        if decision.status == DecisionStatus::Blocked {
            reasons.push("Decision status is BLOCKED".to_string());
        }
        if decision.risk_level == RiskLevel::High {
            reasons.push("Risk level high requires manual handling".to_string());
        }
        reasons.extend(
            missing_prerequisites
                .iter()
                .map(|name| format!("Missing prerequisite: {name}")),
        );

        Self {
            id: IntentId::generate(),
            decision_id: decision.id.clone(),
            requested_by: requested_by.to_string(),
            scope: decision.scope.clone(),
            risk_level: decision.risk_level,
            approval_required: decision.approval_required
                || decision.risk_level.requires_approval(),
            plan: normalize_plan(&decision.decision),
            constraints: SafetyConstraints::LOCKED,
            safety: SafetyBlock {
                blocked: !reasons.is_empty(),
                reasons,
            },
            approval: Approval::default(),
            created_at: now,
        }
    }

    /// Approve or reject are only possible from PENDING while unblocked
    pub fn can_transition(&self) -> bool {
        self.approval.status == ApprovalStatus::Pending && !self.safety.blocked
    }

    /// Approve the intent. Returns whether the transition was applied.
    pub fn approve(&mut self, user_id: &str, reason: &str, now: u64) -> bool {
        self.decide(ApprovalStatus::Approved, user_id, reason, now)
    }

    /// Reject the intent. Returns whether the transition was applied.
    pub fn reject(&mut self, user_id: &str, reason: &str, now: u64) -> bool {
        self.decide(ApprovalStatus::Rejected, user_id, reason, now)
    }

    fn decide(&mut self, status: ApprovalStatus, user_id: &str, reason: &str, now: u64) -> bool {
        if !self.can_transition() {
            return false;
        }
        self.approval = Approval {
            status,
            decided_by: Some(user_id.to_string()),
            reason: Some(reason.to_string()),
            decided_at: Some(now),
        };
        true
    }

    /// The handoff payload, present iff the intent is APPROVED
    pub fn handoff_payload(&self) -> Option<HandoffPayload> {
        (self.approval.status == ApprovalStatus::Approved).then(|| HandoffPayload {
            intent_id: self.id.clone(),
            decision_id: self.decision_id.clone(),
            approval_status: self.approval.status,
            plan: self.plan.clone(),
            constraints: self.constraints,
            advisory: ADVISORY_BANNER.to_string(),
        })
    }
}

/// What a hypothetical future executor would receive. Never executed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffPayload {
    pub intent_id: IntentId,
    pub decision_id: DecisionId,
    pub approval_status: ApprovalStatus,
    pub plan: ExecutionPlan,
    pub constraints: SafetyConstraints,
    pub advisory: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(risk: RiskLevel, status: DecisionStatus) -> DecisionObject {
        DecisionObject::new("pricing", "Raise list prices by 5%", "pricer", risk).with_status(status)
    }

    fn intent(risk: RiskLevel, status: DecisionStatus) -> ExecutionIntent {
        ExecutionIntent::from_decision(&decision(risk, status), "alice", &[], 1)
    }

    #[test]
    fn test_blocked_decision_blocks_intent() {
        let intent = intent(RiskLevel::High, DecisionStatus::Blocked);
        assert!(intent.safety.blocked);
        assert_eq!(intent.safety.reasons.len(), 2);
        assert!(intent.approval_required);
    }

    #[test]
    fn test_high_risk_blocked_even_if_unclassified() {
        // Caller skipped classification: status still PROPOSED
        let intent = intent(RiskLevel::High, DecisionStatus::Proposed);
        assert!(intent.safety.blocked);
        assert!(intent.approval_required);
    }

    #[test]
    fn test_missing_prerequisites() {
        let d = decision(RiskLevel::Low, DecisionStatus::Proposed);
        let intent = ExecutionIntent::from_decision(&d, "alice", &["budget sign-off".to_string()], 1);
        assert!(intent.safety.blocked);
        assert_eq!(
            intent.safety.reasons,
            vec!["Missing prerequisite: budget sign-off".to_string()]
        );
    }

    #[test]
    fn test_approve_once() {
        let mut intent = intent(RiskLevel::Low, DecisionStatus::Proposed);
        assert!(!intent.safety.blocked);
        assert!(intent.approve("bob", "looks fine", 2));
        assert_eq!(intent.approval.status, ApprovalStatus::Approved);
        assert_eq!(intent.approval.decided_by.as_deref(), Some("bob"));
        // Terminal: neither transition applies again
        assert!(!intent.reject("carol", "changed my mind", 3));
        assert!(!intent.approve("carol", "again", 3));
        assert_eq!(intent.approval.decided_by.as_deref(), Some("bob"));
    }

    #[test]
    fn test_blocked_refuses_transitions() {
        let mut intent = intent(RiskLevel::High, DecisionStatus::Blocked);
        assert!(!intent.approve("bob", "override", 2));
        assert!(!intent.reject("bob", "no", 2));
        assert_eq!(intent.approval.status, ApprovalStatus::Pending);
        assert!(intent.handoff_payload().is_none());
    }

    #[test]
    fn test_handoff_only_when_approved() {
        let mut approved = intent(RiskLevel::Medium, DecisionStatus::PendingApproval);
        assert!(approved.handoff_payload().is_none());
        approved.approve("bob", "ok", 2);
        let payload = approved.handoff_payload().unwrap();
        assert_eq!(payload.advisory, ADVISORY_BANNER);
        assert_eq!(payload.approval_status, ApprovalStatus::Approved);
        assert_eq!(payload.constraints, SafetyConstraints::LOCKED);

        let mut rejected = intent(RiskLevel::Low, DecisionStatus::Proposed);
        rejected.reject("bob", "no", 2);
        assert!(rejected.handoff_payload().is_none());
    }

    #[test]
    fn test_equal_text_equal_plan() {
        let a = DecisionObject::new("pricing", "Pause the campaign", "agent-a", RiskLevel::Low);
        let b = DecisionObject::new("ops", "Pause the campaign", "agent-b", RiskLevel::Medium);
        let ia = ExecutionIntent::from_decision(&a, "x", &[], 1);
        let ib = ExecutionIntent::from_decision(&b, "y", &[], 2);
        assert_eq!(
            serde_json::to_string(&ia.plan).unwrap(),
            serde_json::to_string(&ib.plan).unwrap()
        );
    }

    #[test]
    fn test_constraints_are_locked() {
        let c = SafetyConstraints::default();
        assert!(c.execution_disabled());
        assert!(c.no_external_dispatch());
        assert!(c.no_scheduling());
        assert!(c.human_approval_required());

        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(serde_json::from_str::<SafetyConstraints>(&json).unwrap(), c);

        let tampered = json.replace("\"noScheduling\":true", "\"noScheduling\":false");
        assert!(serde_json::from_str::<SafetyConstraints>(&tampered).is_err());
    }
}
