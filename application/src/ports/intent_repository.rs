//! Intent repository port

use async_trait::async_trait;
use steward_domain::{ExecutionIntent, IntentId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntentStoreError {
    #[error("Intent store unavailable: {0}")]
    Unavailable(String),
}

/// Keyed storage of execution intents
#[async_trait]
pub trait IntentRepository: Send + Sync {
    /// Insert or replace an intent by id
    async fn save(&self, intent: ExecutionIntent) -> Result<(), IntentStoreError>;

    async fn get(&self, id: &IntentId) -> Result<Option<ExecutionIntent>, IntentStoreError>;

    /// Every intent in creation order
    async fn list(&self) -> Result<Vec<ExecutionIntent>, IntentStoreError>;
}
