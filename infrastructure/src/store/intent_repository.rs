use async_trait::async_trait;
use std::sync::RwLock;
use steward_application::{IntentRepository, IntentStoreError};
use steward_domain::{ExecutionIntent, IntentId};

/// Intents in creation order; saving an existing id replaces it in place.
#[derive(Default)]
pub struct InMemoryIntentRepository {
    intents: RwLock<Vec<ExecutionIntent>>,
}

impl InMemoryIntentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> IntentStoreError {
    IntentStoreError::Unavailable("intent store lock poisoned".to_string())
}

#[async_trait]
impl IntentRepository for InMemoryIntentRepository {
    async fn save(&self, intent: ExecutionIntent) -> Result<(), IntentStoreError> {
        let mut intents = self.intents.write().map_err(|_| poisoned())?;
        match intents.iter_mut().find(|i| i.id == intent.id) {
            Some(existing) => *existing = intent,
            None => intents.push(intent),
        }
        Ok(())
    }

    async fn get(&self, id: &IntentId) -> Result<Option<ExecutionIntent>, IntentStoreError> {
        let intents = self.intents.read().map_err(|_| poisoned())?;
        Ok(intents.iter().find(|i| &i.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<ExecutionIntent>, IntentStoreError> {
        Ok(self.intents.read().map_err(|_| poisoned())?.clone())
    }
}
