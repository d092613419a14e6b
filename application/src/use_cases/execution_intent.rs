//! Execution-Intent Governor use case
//!
//! Wraps decisions in the non-execution envelope, runs the one-shot human
//! approval workflow and is the only producer of handoff payloads. Every
//! create, approve and reject attempt is audited, refused ones included.

use crate::ports::audit_log::{AuditLog, NoAuditLog, record};
use crate::ports::intent_repository::{IntentRepository, IntentStoreError};
use serde_json::json;
use std::sync::Arc;
use steward_domain::{
    ApprovalStatus, AuditEntry, AuditKind, AuditOutcome, DecisionObject, ExecutionIntent,
    HandoffPayload, IntentId, current_timestamp,
};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum IntentError {
    #[error("Intent store error: {0}")]
    Store(#[from] IntentStoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Approve,
    Reject,
}

impl Verdict {
    fn action(&self) -> &'static str {
        match self {
            Verdict::Approve => "approve",
            Verdict::Reject => "reject",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            Verdict::Approve => "approved",
            Verdict::Reject => "rejected",
        }
    }
}

pub struct ExecutionIntentGovernor<R: IntentRepository + 'static> {
    repository: Arc<R>,
    audit: Arc<dyn AuditLog>,
    /// Serializes read-transition-write so a PENDING intent is decided once
    transitions: Mutex<()>,
}

impl<R: IntentRepository + 'static> ExecutionIntentGovernor<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            audit: Arc::new(NoAuditLog),
            transitions: Mutex::new(()),
        }
    }

    pub fn with_audit_log(mut self, audit: Arc<dyn AuditLog>) -> Self {
        self.audit = audit;
        self
    }

    /// Wrap a decision in a new intent.
    ///
    /// The intent is blocked when the decision is BLOCKED, its risk is
    /// high, or any prerequisite is missing.
    pub async fn create_from_decision(
        &self,
        decision: &DecisionObject,
        requested_by: &str,
        missing_prerequisites: &[String],
    ) -> Result<ExecutionIntent, IntentError> {
        let intent = ExecutionIntent::from_decision(
            decision,
            requested_by,
            missing_prerequisites,
            current_timestamp(),
        );
        self.repository.save(intent.clone()).await?;

        info!(
            intent = %intent.id,
            decision = %intent.decision_id,
            blocked = intent.safety.blocked,
            "Execution intent created"
        );
        record(
            self.audit.as_ref(),
            AuditEntry::new(AuditKind::Intent, intent.id.as_str(), "create", AuditOutcome::Applied)
                .with_actor(requested_by)
                .with_detail(json!({
                    "decisionId": intent.decision_id,
                    "riskLevel": intent.risk_level,
                    "approvalRequired": intent.approval_required,
                    "blocked": intent.safety.blocked,
                    "reasons": intent.safety.reasons,
                    "planFingerprint": intent.plan.fingerprint,
                })),
        );

        Ok(intent)
    }

    /// Approve a PENDING, unblocked intent.
    ///
    /// Returns `None` for an unknown id. A refused transition returns the
    /// unchanged intent.
    pub async fn approve(
        &self,
        id: &IntentId,
        user_id: &str,
        reason: &str,
    ) -> Result<Option<ExecutionIntent>, IntentError> {
        self.decide(id, user_id, reason, Verdict::Approve).await
    }

    /// Reject a PENDING, unblocked intent. Same contract as [`Self::approve`].
    pub async fn reject(
        &self,
        id: &IntentId,
        user_id: &str,
        reason: &str,
    ) -> Result<Option<ExecutionIntent>, IntentError> {
        self.decide(id, user_id, reason, Verdict::Reject).await
    }

    async fn decide(
        &self,
        id: &IntentId,
        user_id: &str,
        reason: &str,
        verdict: Verdict,
    ) -> Result<Option<ExecutionIntent>, IntentError> {
        let _guard = self.transitions.lock().await;

        let Some(mut intent) = self.repository.get(id).await? else {
            return Ok(None);
        };

        let now = current_timestamp();
        let applied = match verdict {
            Verdict::Approve => intent.approve(user_id, reason, now),
            Verdict::Reject => intent.reject(user_id, reason, now),
        };

        let outcome = if applied {
            self.repository.save(intent.clone()).await?;
            info!(intent = %intent.id, by = user_id, "Intent {}", verdict.past_tense());
            AuditOutcome::Applied
        } else {
            warn!(
                intent = %intent.id,
                status = %intent.approval.status,
                blocked = intent.safety.blocked,
                "Intent {} refused",
                verdict.action()
            );
            AuditOutcome::Refused
        };

        record(
            self.audit.as_ref(),
            AuditEntry::new(AuditKind::Intent, intent.id.as_str(), verdict.action(), outcome)
                .with_actor(user_id)
                .with_detail(json!({
                    "reason": reason,
                    "status": intent.approval.status,
                    "blocked": intent.safety.blocked,
                })),
        );

        Ok(Some(intent))
    }

    /// Handoff payload of an APPROVED intent; `None` otherwise
    pub async fn get_handoff_payload(
        &self,
        id: &IntentId,
    ) -> Result<Option<HandoffPayload>, IntentError> {
        let intent = self.repository.get(id).await?;
        Ok(intent
            .filter(|i| i.approval.status == ApprovalStatus::Approved)
            .and_then(|i| i.handoff_payload()))
    }

    pub async fn get_intent(&self, id: &IntentId) -> Result<Option<ExecutionIntent>, IntentError> {
        Ok(self.repository.get(id).await?)
    }

    pub async fn list_intents(&self) -> Result<Vec<ExecutionIntent>, IntentError> {
        Ok(self.repository.list().await?)
    }
}
