//! Declarative playbook guardrails
//!
//! A playbook names a task category and lists forbidden-action patterns
//! plus approval rules. Patterns are compiled once, case-insensitively,
//! and matched against the task goal and its reserved `action` payload key
//! separately; a match in either one counts.

use super::governance::AutonomyGovernanceCheck;
use super::task::AutonomyTask;
use crate::core::error::DomainError;
use crate::core::string::push_unique;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Approval label used when approval is required but none is named
pub const HUMAN_APPROVAL: &str = "human";

/// Playbook as declared in configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playbook {
    pub name: String,
    pub forbidden_actions: Vec<String>,
    pub required_approvals: Vec<String>,
    pub requires_approval: bool,
}

impl Playbook {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn forbid(mut self, pattern: impl Into<String>) -> Self {
        self.forbidden_actions.push(pattern.into());
        self
    }

    pub fn with_required_approval(mut self, approval: impl Into<String>) -> Self {
        self.required_approvals.push(approval.into());
        self
    }

    pub fn with_approval_required(mut self) -> Self {
        self.requires_approval = true;
        self
    }
}

#[derive(Debug, Clone)]
struct CompiledPlaybook {
    playbook: Playbook,
    patterns: Vec<(String, Regex)>,
}

/// Compiled set of playbooks, looked up by name
#[derive(Debug, Clone, Default)]
pub struct PlaybookGuardrails {
    playbooks: Vec<CompiledPlaybook>,
}

impl PlaybookGuardrails {
    /// Compile every forbidden-action pattern.
    ///
    /// Fails on the first invalid pattern. A later playbook with a
    /// duplicate name shadows nothing; the first one wins.
    pub fn compile(playbooks: Vec<Playbook>) -> Result<Self, DomainError> {
        let mut compiled = Vec::with_capacity(playbooks.len());
        for playbook in playbooks {
            let mut patterns = Vec::with_capacity(playbook.forbidden_actions.len());
            for pattern in &playbook.forbidden_actions {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| DomainError::InvalidPlaybookPattern {
                        playbook: playbook.name.clone(),
                        pattern: pattern.clone(),
                        reason: e.to_string(),
                    })?;
                patterns.push((pattern.clone(), regex));
            }
            compiled.push(CompiledPlaybook { playbook, patterns });
        }
        Ok(Self {
            playbooks: compiled,
        })
    }

    pub fn get(&self, name: &str) -> Option<&Playbook> {
        self.find(name).map(|c| &c.playbook)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.playbooks.iter().map(|c| c.playbook.name.as_str())
    }

    fn find(&self, name: &str) -> Option<&CompiledPlaybook> {
        self.playbooks.iter().find(|c| c.playbook.name == name)
    }

    /// Judge a task against its declared playbook.
    ///
    /// - no playbook declared: only the task's own approval flag applies
    /// - unknown playbook: unsafe
    /// - any forbidden pattern match: unsafe, one violation per pattern
    /// - approval required (task or playbook) and `approved_by` is `None`:
    ///   unsafe with no violations, see
    ///   [`AutonomyGovernanceCheck::awaits_approval`]
    pub fn evaluate(&self, task: &AutonomyTask, approved_by: Option<&str>) -> AutonomyGovernanceCheck {
        let Some(name) = task.playbook.as_deref() else {
            return approval_gate(
                AutonomyGovernanceCheck::safe().with_note("No playbook declared"),
                task.requires_approval,
                &[],
                approved_by,
            );
        };

        let Some(compiled) = self.find(name) else {
            return AutonomyGovernanceCheck::violated(vec![format!("Unknown playbook: {name}")])
                .with_note(format!("Playbook '{name}' is not configured"));
        };

        let violations: Vec<String> = compiled
            .patterns
            .iter()
            .filter(|(_, regex)| task.guarded_texts().any(|text| regex.is_match(text)))
            .map(|(pattern, _)| format!("Forbidden action matched: {pattern}"))
            .collect();

        let verdict = if violations.is_empty() {
            AutonomyGovernanceCheck::safe()
        } else {
            AutonomyGovernanceCheck::violated(violations)
        };
        let check = verdict.with_note(format!("Playbook '{name}'"));

        approval_gate(
            check,
            task.requires_approval || compiled.playbook.requires_approval,
            &compiled.playbook.required_approvals,
            approved_by,
        )
    }
}

fn approval_gate(
    mut check: AutonomyGovernanceCheck,
    requires_approval: bool,
    named_approvals: &[String],
    approved_by: Option<&str>,
) -> AutonomyGovernanceCheck {
    if !requires_approval {
        return check;
    }
    for approval in named_approvals {
        push_unique(&mut check.required_approvals, approval);
    }
    if check.required_approvals.is_empty() {
        check.required_approvals.push(HUMAN_APPROVAL.to_string());
    }
    if approved_by.is_none() {
        check.safe_to_proceed = false;
    }
    check
}
