// src/api/mod.rs
// HTTP surface for the daily prompt service

pub mod error;
pub mod http;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::service::DailyPromptService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DailyPromptService>,
}

impl AppState {
    pub fn new(service: Arc<DailyPromptService>) -> Self {
        Self { service }
    }
}

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    http::http_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
