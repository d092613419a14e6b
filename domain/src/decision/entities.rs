//! Decision domain entities

use crate::advisory::SessionId;
use crate::core::time::string_id;
use serde::{Deserialize, Serialize};

string_id!(
    /// Unique identifier of a decision
    DecisionId
);

/// Risk level of a proposed decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Medium and high risk always need a human sign-off
    pub fn requires_approval(&self) -> bool {
        matches!(self, RiskLevel::Medium | RiskLevel::High)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk level '{other}'")),
        }
    }
}

/// Disposition of a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionStatus {
    #[default]
    Proposed,
    PendingApproval,
    Blocked,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DecisionStatus::Proposed => "PROPOSED",
            DecisionStatus::PendingApproval => "PENDING_APPROVAL",
            DecisionStatus::Blocked => "BLOCKED",
        }
    }
}

impl std::fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single proposed decision pending risk-based disposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionObject {
    pub id: DecisionId,
    /// Scope the decision applies to (e.g. "pricing")
    pub scope: String,
    /// Decision text; the execution plan is derived from this alone
    pub decision: String,
    /// Agent proposing the decision
    pub proposed_by: String,
    /// Agents backing the proposal (capped)
    #[serde(default)]
    pub supporting_agents: Vec<String>,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub approval_required: bool,
    #[serde(default)]
    pub assumptions: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub status: DecisionStatus,
    /// Advisory session this decision was grounded on, if any
    #[serde(default)]
    pub grounding_session_id: Option<SessionId>,
}

impl DecisionObject {
    pub fn new(
        scope: impl Into<String>,
        decision: impl Into<String>,
        proposed_by: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            id: DecisionId::generate(),
            scope: scope.into(),
            decision: decision.into(),
            proposed_by: proposed_by.into(),
            supporting_agents: Vec::new(),
            confidence: 0.5,
            risk_level,
            approval_required: false,
            assumptions: Vec::new(),
            risks: Vec::new(),
            status: DecisionStatus::Proposed,
            grounding_session_id: None,
        }
    }

    pub fn with_supporting_agent(mut self, agent: impl Into<String>) -> Self {
        self.supporting_agents.push(agent.into());
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    pub fn with_status(mut self, status: DecisionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_assumption(mut self, assumption: impl Into<String>) -> Self {
        self.assumptions.push(assumption.into());
        self
    }

    pub fn with_risk(mut self, risk: impl Into<String>) -> Self {
        self.risks.push(risk.into());
        self
    }

    pub fn grounded_on(mut self, session_id: SessionId) -> Self {
        self.grounding_session_id = Some(session_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_parse() {
        assert_eq!("HIGH".parse::<RiskLevel>(), Ok(RiskLevel::High));
        assert_eq!(" low ".parse::<RiskLevel>(), Ok(RiskLevel::Low));
        assert!("extreme".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_risk_requires_approval() {
        assert!(!RiskLevel::Low.requires_approval());
        assert!(RiskLevel::Medium.requires_approval());
        assert!(RiskLevel::High.requires_approval());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&DecisionStatus::PendingApproval).unwrap(),
            "\"PENDING_APPROVAL\""
        );
        assert_eq!(DecisionStatus::Blocked.to_string(), "BLOCKED");
    }

    #[test]
    fn test_deserialize_minimal_decision() {
        let json = r#"{
            "id": "d-1",
            "scope": "pricing",
            "decision": "Raise list prices by 5%",
            "proposedBy": "pricing-agent",
            "confidence": 0.7,
            "riskLevel": "high"
        }"#;
        let decision: DecisionObject = serde_json::from_str(json).unwrap();
        assert_eq!(decision.risk_level, RiskLevel::High);
        assert_eq!(decision.status, DecisionStatus::Proposed);
        assert!(decision.supporting_agents.is_empty());
    }
}
