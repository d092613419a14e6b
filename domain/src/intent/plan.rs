//! Deterministic plan derivation
//!
//! The plan is a total function of the decision text. Agent identity,
//! time and ids never enter it, so two decisions with equal text always
//! produce byte-identical plans.

use crate::core::string::collapse_whitespace;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const REVIEW_STEP: &str = "Review the approved decision and its stated assumptions";
const VERIFY_STEP: &str = "Verify the outcome against the decision and record the result";
const CLAUSE_SEPARATORS: &[char] = &['.', ';', '\n'];

/// Text-only description of what a future executor would do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    /// Whitespace-collapsed decision text
    pub summary: String,
    /// Ordered steps
    pub steps: Vec<String>,
    /// SHA-256 hex of `summary`
    pub fingerprint: String,
}

/// Derive the execution plan for a decision text.
pub fn normalize_plan(decision_text: &str) -> ExecutionPlan {
    let summary = collapse_whitespace(decision_text);

    let mut steps = vec![REVIEW_STEP.to_string()];
    steps.extend(
        decision_text
            .split(CLAUSE_SEPARATORS)
            .map(collapse_whitespace)
            .filter(|clause| !clause.is_empty())
            .map(|clause| format!("Prepare: {clause}")),
    );
    steps.push(VERIFY_STEP.to_string());

    let mut hasher = Sha256::new();
    hasher.update(summary.as_bytes());

    ExecutionPlan {
        summary,
        steps,
        fingerprint: hex::encode(hasher.finalize()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_steps() {
        let plan = normalize_plan("Raise prices by 5%.  Notify   sales; update the catalog");
        assert_eq!(
            plan.summary,
            "Raise prices by 5%. Notify sales; update the catalog"
        );
        assert_eq!(
            plan.steps,
            vec![
                REVIEW_STEP.to_string(),
                "Prepare: Raise prices by 5%".to_string(),
                "Prepare: Notify sales".to_string(),
                "Prepare: update the catalog".to_string(),
                VERIFY_STEP.to_string(),
            ]
        );
        assert_eq!(plan.fingerprint.len(), 64);
    }

    #[test]
    fn test_plan_is_stable() {
        let text = "Pause the campaign.\nReallocate budget";
        let first = normalize_plan(text);
        for _ in 0..5 {
            assert_eq!(normalize_plan(text), first);
        }
        assert_eq!(
            serde_json::to_string(&normalize_plan(text)).unwrap(),
            serde_json::to_string(&first).unwrap()
        );
    }

    #[test]
    fn test_different_text_different_fingerprint() {
        assert_ne!(
            normalize_plan("Pause the campaign").fingerprint,
            normalize_plan("Resume the campaign").fingerprint
        );
    }

    #[test]
    fn test_empty_text_is_total() {
        let plan = normalize_plan("   ");
        assert!(plan.summary.is_empty());
        assert_eq!(plan.steps.len(), 2);
    }
}
