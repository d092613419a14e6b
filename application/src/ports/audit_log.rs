//! Port for the structured audit trail.
//!
//! Defines the [`AuditLog`] trait for recording what the decision, intent
//! and task components did. This is separate from `tracing`-based
//! operation logs: tracing handles human-readable diagnostics, while this
//! port captures an append-only, queryable record per subject.
//!
//! Audit is observability, not authorization. Use cases write through
//! [`record`], which reports failures with `warn!` and never rolls back
//! the transition being audited.

use steward_domain::AuditEntry;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Audit I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Audit serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Audit log unavailable: {0}")]
    Unavailable(String),
}

/// Append-only audit trail.
///
/// `append` is synchronous: writers are expected to be quick (memory or
/// a buffered file) and callers do not wait on anything else.
pub trait AuditLog: Send + Sync {
    fn append(&self, entry: AuditEntry) -> Result<(), AuditError>;

    /// Every entry recorded for `subject_id`, in append order
    fn entries_for(&self, subject_id: &str) -> Result<Vec<AuditEntry>, AuditError>;
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditLog;

impl AuditLog for NoAuditLog {
    fn append(&self, _entry: AuditEntry) -> Result<(), AuditError> {
        Ok(())
    }

    fn entries_for(&self, _subject_id: &str) -> Result<Vec<AuditEntry>, AuditError> {
        Ok(Vec::new())
    }
}

/// Append an entry, logging a failed write as a secondary failure
pub fn record(log: &dyn AuditLog, entry: AuditEntry) {
    let event = entry.event_type();
    let subject = entry.subject_id.clone();
    if let Err(e) = log.append(entry) {
        warn!(event = %event, subject = %subject, "Audit write failed: {}", e);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Keeps every appended entry in memory
    #[derive(Default)]
    pub(crate) struct RecordingAudit {
        entries: Mutex<Vec<AuditEntry>>,
    }

    impl AuditLog for RecordingAudit {
        fn append(&self, entry: AuditEntry) -> Result<(), AuditError> {
            self.entries.lock().unwrap().push(entry);
            Ok(())
        }

        fn entries_for(&self, subject_id: &str) -> Result<Vec<AuditEntry>, AuditError> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.subject_id == subject_id)
                .cloned()
                .collect())
        }
    }

    /// Rejects every write
    pub(crate) struct FailingAudit;

    impl AuditLog for FailingAudit {
        fn append(&self, _entry: AuditEntry) -> Result<(), AuditError> {
            Err(AuditError::Unavailable("disk full".to_string()))
        }

        fn entries_for(&self, _subject_id: &str) -> Result<Vec<AuditEntry>, AuditError> {
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FailingAudit, RecordingAudit};
    use super::*;
    use steward_domain::{AuditKind, AuditOutcome};

    fn entry(subject: &str) -> AuditEntry {
        AuditEntry::new(AuditKind::Decision, subject, "classify", AuditOutcome::Applied)
    }

    #[test]
    fn test_record_appends_by_subject() {
        let log = RecordingAudit::default();
        record(&log, entry("d-1"));
        record(&log, entry("d-2"));
        record(&log, entry("d-1"));

        assert_eq!(log.entries_for("d-1").unwrap().len(), 2);
        assert_eq!(log.entries_for("d-2").unwrap().len(), 1);
    }

    #[test]
    fn test_record_swallows_write_failure() {
        record(&FailingAudit, entry("d-1"));
        assert!(FailingAudit.entries_for("d-1").unwrap().is_empty());
    }
}
