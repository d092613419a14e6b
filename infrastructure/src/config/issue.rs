//! Structured configuration issues reported by [`FileConfig::validate`].
//!
//! [`FileConfig::validate`]: super::FileConfig::validate

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A cap or size that must be positive is zero.
    ZeroValue { field: String },
    /// A string field does not parse into its enum.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A playbook's forbidden-action pattern is not a valid regex.
    InvalidPattern { playbook: String, pattern: String },
    /// A playbook has an empty name.
    EmptyPlaybookName,
    /// Two playbooks share a name; the later one wins.
    DuplicatePlaybook { name: String },
    /// More default agents than a question may name.
    TooManyDefaultAgents { count: usize, max: usize },
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

pub(crate) fn zero_value(field: &str) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::ZeroValue {
            field: field.to_string(),
        },
        format!("{field}: must be greater than zero"),
    )
}
