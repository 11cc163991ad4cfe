// src/store/sqlite.rs
//! SQLite-backed prompt store.
//!
//! One row keyed by [`DAILY_PROMPT_KEY`], written with an upsert. No
//! transaction wraps the service's read-then-write; a concurrent double write
//! for the same day just keeps the last one.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use super::{DAILY_PROMPT_KEY, DailyPrompt, PromptStore};
use crate::error::StoreError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a SQLite connection pool, creating the database file if needed
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // Each in-memory connection is its own database; keep exactly one alive
    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
            // SQLite is single-writer, but can have multiple readers
            .max_connections(5)
            // Don't wait too long for a connection
            .acquire_timeout(Duration::from_secs(10))
            // Recycle connections periodically
            .max_lifetime(Duration::from_secs(1800))
    };

    Ok(pool_options.connect_with(options).await?)
}

#[derive(Debug, Clone)]
pub struct SqlitePromptStore {
    pool: SqlitePool,
}

impl SqlitePromptStore {
    /// Connect and apply pending migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        info!("Connecting to database: {}", database_url);
        let pool = create_pool(database_url).await?;
        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        MIGRATOR.run(&pool).await?;
        debug!("Migrations complete");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PromptStore for SqlitePromptStore {
    async fn get(&self) -> Result<Option<DailyPrompt>, StoreError> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT prompt, date FROM daily_prompt WHERE id = ?")
                .bind(DAILY_PROMPT_KEY)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(prompt, date)| DailyPrompt { prompt, date }))
    }

    async fn set(&self, record: &DailyPrompt) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO daily_prompt (id, prompt, date, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                prompt = excluded.prompt,
                date = excluded.date,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(DAILY_PROMPT_KEY)
        .bind(&record.prompt)
        .bind(&record.date)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        debug!(date = %record.date, "Saved daily prompt");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqlitePromptStore {
        SqlitePromptStore::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_returns_none() {
        let store = memory_store().await;
        assert_eq!(store.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = memory_store().await;
        let record = DailyPrompt::new("A toaster running for president.", "6/1/2024");
        store.set(&record).await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn test_set_overwrites_single_row() {
        let store = memory_store().await;
        store.set(&DailyPrompt::new("first", "6/1/2024")).await.unwrap();
        store.set(&DailyPrompt::new("second", "6/2/2024")).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM daily_prompt")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(store.get().await.unwrap(), Some(DailyPrompt::new("second", "6/2/2024")));
    }

    #[tokio::test]
    async fn test_record_survives_reconnect() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("prompt.db").display());

        {
            let store = SqlitePromptStore::connect(&url).await.unwrap();
            store.set(&DailyPrompt::new("persisted", "6/2/2024")).await.unwrap();
            store.pool().close().await;
        }

        let store = SqlitePromptStore::connect(&url).await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some(DailyPrompt::new("persisted", "6/2/2024")));
    }
}
