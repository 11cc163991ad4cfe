// src/lib.rs
// Daily Prompt - one creative prompt per canonical day, cached and refreshed on schedule

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod prompt;
pub mod scheduler;
pub mod service;
pub mod store;

pub use calendar::{CanonicalDate, Calendar, Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{ConfigError, ServiceError, StoreError};
pub use generator::{GeneratedPrompt, PromptGenerator, PromptSource};
pub use service::{DailyPromptService, PromptOutcome, ScheduledOutcome};
pub use store::{DailyPrompt, PromptStore};
