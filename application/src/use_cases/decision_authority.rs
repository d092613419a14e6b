//! Decision Authority use case
//!
//! Classifies one proposed decision. Structural problems come back as data
//! alongside the classified decision; the only side effect is one audit
//! entry keyed by decision id.

use crate::config::DecisionParams;
use crate::ports::audit_log::{AuditLog, NoAuditLog, record};
use serde_json::json;
use std::sync::Arc;
use steward_domain::{
    AuditEntry, AuditKind, AuditOutcome, Classification, DecisionObject, classify_decision,
};
use tracing::info;

pub struct DecisionAuthority {
    params: DecisionParams,
    audit: Arc<dyn AuditLog>,
}

impl Default for DecisionAuthority {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionAuthority {
    pub fn new() -> Self {
        Self {
            params: DecisionParams::default(),
            audit: Arc::new(NoAuditLog),
        }
    }

    pub fn with_params(mut self, params: DecisionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_audit_log(mut self, audit: Arc<dyn AuditLog>) -> Self {
        self.audit = audit;
        self
    }

    /// Classify a decision by risk and check its agent structure
    pub fn classify(
        &self,
        decision: DecisionObject,
        primary_agent_id: &str,
        all_agent_ids: &[String],
    ) -> Classification {
        let classification = classify_decision(
            decision,
            primary_agent_id,
            all_agent_ids,
            self.params.max_supporting_agents,
        );
        let decision = &classification.decision;

        info!(
            decision = %decision.id,
            risk = %decision.risk_level,
            status = decision.status.as_str(),
            errors = classification.errors.len(),
            "Decision classified"
        );

        record(
            self.audit.as_ref(),
            AuditEntry::new(
                AuditKind::Decision,
                decision.id.as_str(),
                "classify",
                AuditOutcome::Applied,
            )
            .with_actor(primary_agent_id)
            .with_detail(json!({
                "scope": decision.scope,
                "riskLevel": decision.risk_level,
                "status": decision.status,
                "approvalRequired": decision.approval_required,
                "supportingAgents": decision.supporting_agents,
                "errors": classification.errors,
            })),
        );

        classification
    }
}
