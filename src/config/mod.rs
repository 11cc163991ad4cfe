// src/config/mod.rs
// Environment-based configuration - single source of truth for all env vars

use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveTime;
use chrono_tz::Tz;
use tracing::Level;

use crate::error::ConfigError;
use crate::llm::gemini::{DEFAULT_MODEL, GEMINI_API_BASE};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./daily_prompt.db";
pub const DEFAULT_TIMEZONE: &str = "America/New_York";
pub const DEFAULT_SCHEDULE_AT: &str = "00:00";

#[derive(Debug, Clone)]
pub struct Config {
    // ── Gemini
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Unset means no client-side deadline
    pub generation_timeout: Option<Duration>,

    // ── Database
    pub database_url: String,

    // ── Server
    pub host: String,
    pub port: u16,

    // ── Calendar and schedule
    pub timezone: Tz,
    pub schedule_at: NaiveTime,

    // ── Logging
    pub log_level: Level,
}

impl Config {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        // Without a key every request would silently fall back; refuse instead
        let gemini_api_key = get("GEMINI_API_KEY")
            .or_else(|| get("GOOGLE_API_KEY"))
            .ok_or(ConfigError::MissingApiKey)?;

        let timezone_name = get("DAILY_PROMPT_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let timezone = Tz::from_str(&timezone_name).map_err(|_| ConfigError::InvalidTimezone(timezone_name.clone()))?;

        let schedule_raw = get("DAILY_PROMPT_SCHEDULE_AT").unwrap_or_else(|| DEFAULT_SCHEDULE_AT.to_string());
        let schedule_at = NaiveTime::parse_from_str(&schedule_raw, "%H:%M")
            .map_err(|_| ConfigError::InvalidScheduleTime(schedule_raw.clone()))?;

        let generation_timeout = parse_opt::<u64>(get("DAILY_PROMPT_GENERATION_TIMEOUT_SECS"), "DAILY_PROMPT_GENERATION_TIMEOUT_SECS")?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            gemini_api_key,
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| GEMINI_API_BASE.to_string()),
            generation_timeout,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: get("DAILY_PROMPT_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_opt(get("DAILY_PROMPT_PORT"), "DAILY_PROMPT_PORT")?.unwrap_or(8080),
            timezone,
            schedule_at,
            log_level: parse_opt(get("DAILY_PROMPT_LOG_LEVEL"), "DAILY_PROMPT_LOG_LEVEL")?.unwrap_or(Level::INFO),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_opt<T: FromStr>(value: Option<String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| v.parse::<T>().map_err(|_| ConfigError::InvalidValue { key, value: v }))
        .transpose()
}
