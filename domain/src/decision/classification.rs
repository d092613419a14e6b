//! Risk classification of a decision

use super::entities::{DecisionObject, DecisionStatus, RiskLevel};
use crate::core::string::push_unique;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_SUPPORTING_AGENTS: usize = 3;
pub const PRIMARY_AGENT_ERROR: &str = "Exactly one primary agent per scope";

/// Status for a risk level. Total and pure.
pub fn status_for_risk(risk: RiskLevel) -> DecisionStatus {
    match risk {
        RiskLevel::Low => DecisionStatus::Proposed,
        RiskLevel::Medium => DecisionStatus::PendingApproval,
        RiskLevel::High => DecisionStatus::Blocked,
    }
}

/// A classified decision and the structural errors found on it.
///
/// Errors are data: an invalid decision stays inspectable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub decision: DecisionObject,
    pub errors: Vec<String>,
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Classify a decision by risk and check its agent structure.
///
/// - `primary_agent_id` must be non-empty and occur exactly once in
///   `all_agent_ids`.
/// - Supporting agents are the distinct `all_agent_ids` other than the
///   primary, merged with the decision's own list, and may not exceed
///   `max_supporting`.
///
/// Status and approval flag depend only on the risk level.
pub fn classify_decision(
    mut decision: DecisionObject,
    primary_agent_id: &str,
    all_agent_ids: &[String],
    max_supporting: usize,
) -> Classification {
    let mut errors = Vec::new();

    let primary = primary_agent_id.trim();
    let occurrences = all_agent_ids
        .iter()
        .filter(|id| id.as_str() == primary)
        .count();
    if primary.is_empty() || occurrences != 1 {
        errors.push(PRIMARY_AGENT_ERROR.to_string());
    }

    let mut supporting: Vec<String> = Vec::new();
    for agent in decision.supporting_agents.iter().chain(all_agent_ids) {
        if agent != primary && !agent.trim().is_empty() {
            push_unique(&mut supporting, agent);
        }
    }
    if supporting.len() > max_supporting {
        errors.push(format!("Supporting agents exceed {max_supporting}"));
    }
    decision.supporting_agents = supporting;

    decision.status = status_for_risk(decision.risk_level);
    decision.approval_required = decision.approval_required || decision.risk_level.requires_approval();

    Classification { decision, errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agents(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn decision(risk: RiskLevel) -> DecisionObject {
        DecisionObject::new("pricing", "Raise list prices by 5%", "pricer", risk)
    }

    #[test]
    fn test_status_lookup() {
        assert_eq!(status_for_risk(RiskLevel::Low), DecisionStatus::Proposed);
        assert_eq!(
            status_for_risk(RiskLevel::Medium),
            DecisionStatus::PendingApproval
        );
        assert_eq!(status_for_risk(RiskLevel::High), DecisionStatus::Blocked);
    }

    #[test]
    fn test_high_risk_blocked_without_errors() {
        let result = classify_decision(
            decision(RiskLevel::High),
            "pricer",
            &agents(&["pricer"]),
            DEFAULT_MAX_SUPPORTING_AGENTS,
        );
        assert_eq!(result.decision.status, DecisionStatus::Blocked);
        assert!(result.errors.is_empty());
        assert!(result.decision.approval_required);
    }

    #[test]
    fn test_status_ignores_prior_status() {
        let prior = decision(RiskLevel::Low).with_status(DecisionStatus::Blocked);
        let result = classify_decision(prior, "pricer", &agents(&["pricer"]), 3);
        assert_eq!(result.decision.status, DecisionStatus::Proposed);
        assert!(!result.decision.approval_required);
    }

    #[test]
    fn test_repeated_classification_is_stable() {
        let first = classify_decision(decision(RiskLevel::Medium), "pricer", &agents(&["pricer"]), 3);
        let second = classify_decision(first.decision.clone(), "pricer", &agents(&["pricer"]), 3);
        assert_eq!(first.decision.status, second.decision.status);
        assert_eq!(second.decision.status, DecisionStatus::PendingApproval);
    }

    #[test]
    fn test_missing_primary() {
        let result = classify_decision(decision(RiskLevel::Low), "pricer", &agents(&["other"]), 3);
        assert_eq!(result.errors, vec![PRIMARY_AGENT_ERROR.to_string()]);
        // Still classified
        assert_eq!(result.decision.status, DecisionStatus::Proposed);
    }

    #[test]
    fn test_duplicate_or_empty_primary() {
        let dup = classify_decision(
            decision(RiskLevel::Low),
            "pricer",
            &agents(&["pricer", "pricer"]),
            3,
        );
        assert!(!dup.is_valid());
        let empty = classify_decision(decision(RiskLevel::Low), "  ", &agents(&["pricer"]), 3);
        assert!(empty.errors.iter().any(|e| e.contains("Exactly one primary agent")));
    }

    #[test]
    fn test_supporting_cap() {
        let result = classify_decision(
            decision(RiskLevel::Low),
            "pricer",
            &agents(&["pricer", "a", "b", "c", "d"]),
            3,
        );
        assert_eq!(result.errors, vec!["Supporting agents exceed 3".to_string()]);
        assert_eq!(result.decision.supporting_agents.len(), 4);
    }

    #[test]
    fn test_supporting_merge_dedups() {
        let d = decision(RiskLevel::Low).with_supporting_agent("a");
        let result = classify_decision(d, "pricer", &agents(&["pricer", "a", "b"]), 3);
        assert!(result.is_valid());
        assert_eq!(result.decision.supporting_agents, vec!["a", "b"]);
    }
}
