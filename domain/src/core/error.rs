//! Domain error types

use thiserror::Error;

/// Structural validation failures of an advisory session input.
///
/// The display strings are part of the public contract: transport layers
/// surface them verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Must provide 1-10 questions")]
    QuestionCount,

    #[error("Each question must have 1-3 scopes")]
    ScopeCount,

    #[error("Max 3 agents per question")]
    AgentCount,

    #[error("Question length 10-2000 chars")]
    QuestionLength,
}

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid playbook pattern '{pattern}' in playbook '{playbook}': {reason}")]
    InvalidPlaybookPattern {
        playbook: String,
        pattern: String,
        reason: String,
    },

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl DomainError {
    /// Check if this error is a structural validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_literal() {
        assert_eq!(
            ValidationError::QuestionCount.to_string(),
            "Must provide 1-10 questions"
        );
        assert_eq!(
            ValidationError::ScopeCount.to_string(),
            "Each question must have 1-3 scopes"
        );
        assert_eq!(
            ValidationError::AgentCount.to_string(),
            "Max 3 agents per question"
        );
        assert_eq!(
            ValidationError::QuestionLength.to_string(),
            "Question length 10-2000 chars"
        );
    }

    #[test]
    fn test_validation_is_transparent() {
        let error: DomainError = ValidationError::AgentCount.into();
        assert!(error.is_validation());
        assert_eq!(error.to_string(), "Max 3 agents per question");
    }

    #[test]
    fn test_is_validation_check() {
        let error = DomainError::InvalidValue("severity".to_string());
        assert!(!error.is_validation());
    }
}
