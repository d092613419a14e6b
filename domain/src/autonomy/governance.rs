//! Governance judgments and the fail-closed merge

use crate::core::string::push_unique;
use serde::{Deserialize, Serialize};

/// A structured safety judgment from a playbook or a policy engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomyGovernanceCheck {
    pub safe_to_proceed: bool,
    #[serde(default)]
    pub violations: Vec<String>,
    #[serde(default)]
    pub required_approvals: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl AutonomyGovernanceCheck {
    pub fn safe() -> Self {
        Self {
            safe_to_proceed: true,
            ..Default::default()
        }
    }

    /// Unsafe judgment carrying the given violations
    pub fn violated(violations: Vec<String>) -> Self {
        Self {
            safe_to_proceed: false,
            violations,
            ..Default::default()
        }
    }

    /// Unsafe judgment used when a judge could not answer at all
    pub fn fail_closed(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            safe_to_proceed: false,
            violations: vec![reason.clone()],
            required_approvals: Vec::new(),
            note: Some(reason),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_required_approval(mut self, approval: impl Into<String>) -> Self {
        let approval = approval.into();
        push_unique(&mut self.required_approvals, &approval);
        self
    }

    /// Unsafe only because a human has not approved yet
    pub fn awaits_approval(&self) -> bool {
        !self.safe_to_proceed && self.violations.is_empty()
    }
}

/// Combine a playbook judgment with an optional policy-engine judgment.
///
/// Safe only if every present judgment is safe. Violations and required
/// approvals are de-duplicated unions in first-seen order, playbook first.
/// The note prefers the engine's, falling back to the playbook's.
pub fn merge_governance(
    playbook: &AutonomyGovernanceCheck,
    engine: Option<&AutonomyGovernanceCheck>,
) -> AutonomyGovernanceCheck {
    let Some(engine) = engine else {
        return playbook.clone();
    };

    let mut violations = Vec::new();
    let mut required_approvals = Vec::new();
    for check in [playbook, engine] {
        for v in &check.violations {
            push_unique(&mut violations, v);
        }
        for a in &check.required_approvals {
            push_unique(&mut required_approvals, a);
        }
    }

    AutonomyGovernanceCheck {
        safe_to_proceed: playbook.safe_to_proceed && engine.safe_to_proceed,
        violations,
        required_approvals,
        note: engine.note.clone().or_else(|| playbook.note.clone()),
    }
}
