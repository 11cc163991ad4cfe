// src/api/http/mod.rs

use axum::{
    Router,
    routing::{any, get},
};

use crate::api::AppState;

mod prompt;

pub use prompt::{PromptQuery, PromptResponse, daily_prompt_handler, health};

pub fn http_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/daily-prompt", any(daily_prompt_handler))
}
