// src/error.rs
// Error types for configuration, persistence and the prompt service

/// Fatal configuration problems detected at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY (or GOOGLE_API_KEY) is not set; refusing to start")]
    MissingApiKey,

    #[error("Unknown time zone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid schedule time '{0}', expected HH:MM")]
    InvalidScheduleTime(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Errors from the persisted prompt record
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the freshness policy
///
/// Generation never fails (fallback covers it), so only persistence shows up here.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Failed to read stored prompt: {0}")]
    Read(#[source] StoreError),

    #[error("Failed to save prompt: {0}")]
    Write(#[source] StoreError),
}
