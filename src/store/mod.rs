// src/store/mod.rs
// Persistence for the single daily prompt record

mod memory;
mod sqlite;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

pub use memory::MemoryPromptStore;
pub use sqlite::{SqlitePromptStore, create_pool};

/// Fixed key of the one record this service keeps
pub const DAILY_PROMPT_KEY: &str = "daily";

/// The persisted prompt record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPrompt {
    pub prompt: String,
    /// Canonical date, `M/D/YYYY`
    pub date: String,
}

impl DailyPrompt {
    pub fn new(prompt: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            date: date.into(),
        }
    }
}

/// Read/overwrite access to the daily record. `set` replaces, never appends.
#[async_trait]
pub trait PromptStore: Send + Sync {
    async fn get(&self) -> Result<Option<DailyPrompt>, StoreError>;

    async fn set(&self, record: &DailyPrompt) -> Result<(), StoreError>;
}
