//! Session store port
//!
//! Holds the retained [`AdvisorySessionMemoryRecord`]s keyed by session id.
//! Retention is the adapter's concern: an expired record must read back as
//! absent.

use async_trait::async_trait;
use steward_domain::{AdvisorySessionMemoryRecord, SessionId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a record; last writer wins per session id
    async fn save(&self, record: AdvisorySessionMemoryRecord) -> Result<(), SessionStoreError>;

    /// Look up a record; `None` when unknown or expired
    async fn get(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<AdvisorySessionMemoryRecord>, SessionStoreError>;
}
