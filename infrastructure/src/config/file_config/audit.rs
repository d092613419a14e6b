//! Audit trail configuration from TOML (`[audit]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ```toml
/// [audit]
/// jsonl_path = "~/.local/state/steward/audit.jsonl"
/// ```
///
/// Without a path the audit trail lives in memory for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    pub jsonl_path: Option<PathBuf>,
}
