// src/store/memory.rs
// In-process store, for tests and throwaway runs

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DailyPrompt, PromptStore};
use crate::error::StoreError;

#[derive(Debug, Default)]
pub struct MemoryPromptStore {
    record: RwLock<Option<DailyPrompt>>,
}

impl MemoryPromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: DailyPrompt) -> Self {
        Self {
            record: RwLock::new(Some(record)),
        }
    }
}

#[async_trait]
impl PromptStore for MemoryPromptStore {
    async fn get(&self) -> Result<Option<DailyPrompt>, StoreError> {
        Ok(self.record.read().await.clone())
    }

    async fn set(&self, record: &DailyPrompt) -> Result<(), StoreError> {
        *self.record.write().await = Some(record.clone());
        Ok(())
    }
}
