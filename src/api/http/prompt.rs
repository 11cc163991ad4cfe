// src/api/http/prompt.rs
use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::api::error::ApiResult;

#[derive(Debug, Default, Deserialize)]
pub struct PromptQuery {
    pub force: Option<String>,
}

impl PromptQuery {
    /// Only the literal `true` forces a refresh
    pub fn is_forced(&self) -> bool {
        self.force.as_deref() == Some("true")
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptResponse {
    pub success: bool,
    pub prompt: String,
    pub date: String,
}

/// On-demand daily prompt, any HTTP method
pub async fn daily_prompt_handler(
    State(state): State<AppState>,
    Query(query): Query<PromptQuery>,
) -> ApiResult<Json<PromptResponse>> {
    let outcome = state.service.get_prompt(query.is_forced()).await?;

    Ok(Json(PromptResponse {
        success: true,
        prompt: outcome.record.prompt,
        date: outcome.record.date,
    }))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_flag_parsing() {
        let query = |v: Option<&str>| PromptQuery {
            force: v.map(str::to_string),
        };
        assert!(query(Some("true")).is_forced());
        assert!(!query(Some("false")).is_forced());
        assert!(!query(Some("1")).is_forced());
        assert!(!query(Some("TRUE")).is_forced());
        assert!(!query(None).is_forced());
    }
}
