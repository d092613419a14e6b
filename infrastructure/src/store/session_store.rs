//! TTL-bounded advisory session store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use steward_application::{SessionStore, SessionStoreError};
use steward_domain::{AdvisorySessionMemoryRecord, SessionId, current_timestamp};
use tracing::debug;

/// Millisecond clock used for expiry checks
pub type Clock = Arc<dyn Fn() -> u64 + Send + Sync>;

/// Session records keyed by id, pruned lazily on every access.
///
/// There is no background sweeper: expired records are dropped the next
/// time the store is read or written.
pub struct InMemorySessionStore {
    records: Mutex<HashMap<SessionId, AdvisorySessionMemoryRecord>>,
    ttl_ms: u64,
    clock: Clock,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            ttl_ms: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
            clock: Arc::new(current_timestamp),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, AdvisorySessionMemoryRecord>>, SessionStoreError>
    {
        let mut records = self
            .records
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session store lock poisoned".to_string()))?;

        let now = (self.clock)();
        let before = records.len();
        records.retain(|_, record| !record.is_expired(now, self.ttl_ms));
        if records.len() < before {
            debug!(pruned = before - records.len(), "Expired advisory sessions pruned");
        }
        Ok(records)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, record: AdvisorySessionMemoryRecord) -> Result<(), SessionStoreError> {
        let mut records = self.lock()?;
        records.insert(record.session_id.clone(), record);
        Ok(())
    }

    async fn get(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<AdvisorySessionMemoryRecord>, SessionStoreError> {
        Ok(self.lock()?.get(session_id).cloned())
    }
}
