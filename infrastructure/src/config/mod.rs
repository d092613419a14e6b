//! Configuration file loading for steward
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STEWARD_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./steward.toml` or `./.steward.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/steward/config.toml`
//! 5. Default values

mod file_config;
mod issue;
mod loader;

pub use file_config::{
    FileAdvisoryConfig, FileAuditConfig, FileAutonomyConfig, FileConfig, FileDecisionConfig,
    FileGovernanceConfig,
};
pub use issue::{ConfigIssue, ConfigIssueCode, Severity};
pub use loader::ConfigLoader;

use steward_domain::DomainError;
use thiserror::Error;

/// Errors turning a loaded configuration into running components
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
