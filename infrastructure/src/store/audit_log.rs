use std::sync::Mutex;
use steward_application::{AuditError, AuditLog};
use steward_domain::AuditEntry;

/// Process-local audit trail, queryable by subject id.
#[derive(Default)]
pub struct InMemoryAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every entry in append order
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl AuditLog for InMemoryAuditLog {
    fn append(&self, entry: AuditEntry) -> Result<(), AuditError> {
        self.entries
            .lock()
            .map_err(|_| AuditError::Unavailable("audit lock poisoned".to_string()))?
            .push(entry);
        Ok(())
    }

    fn entries_for(&self, subject_id: &str) -> Result<Vec<AuditEntry>, AuditError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AuditError::Unavailable("audit lock poisoned".to_string()))?;
        Ok(entries
            .iter()
            .filter(|e| e.subject_id == subject_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_domain::{AuditKind, AuditOutcome};

    #[test]
    fn test_entries_for_keeps_order() {
        let log = InMemoryAuditLog::new();
        log.append(AuditEntry::new(AuditKind::Task, "t-1", "approve", AuditOutcome::Refused))
            .unwrap();
        log.append(AuditEntry::new(AuditKind::Task, "t-2", "reject", AuditOutcome::Applied))
            .unwrap();
        log.append(AuditEntry::new(AuditKind::Task, "t-1", "approve", AuditOutcome::Applied))
            .unwrap();

        let entries = log.entries_for("t-1").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].outcome, AuditOutcome::Refused);
        assert_eq!(entries[1].outcome, AuditOutcome::Applied);
        assert_eq!(log.entries().len(), 3);
    }
}
