// src/llm/gemini/client.rs
// Google Gemini generateContent client (single-turn, text only)
// Every failure is reported as GenerateResult::Failed, never as an Err

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::llm::gemini::extraction::extract_text;
use crate::llm::gemini::types::{GeminiContent, GeminiRequest, GeminiResponse, GenerationConfig};
use crate::llm::provider::{GenerateFailure, GenerateResult, GenerationRequest, TextGenerator};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    /// Create a new Gemini client with default model
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL.to_string())
    }

    /// Create a new Gemini client with custom model
    pub fn with_model(api_key: String, model: String) -> Self {
        Self::with_http_client(api_key, model, Client::new())
    }

    /// Create a new Gemini client with a caller-built HTTP client
    pub fn with_http_client(api_key: String, model: String, http: Client) -> Self {
        Self {
            api_key,
            model,
            base_url: GEMINI_API_BASE.to_string(),
            http,
        }
    }

    /// HTTP client with an optional overall request timeout.
    /// `None` leaves the deadline to the hosting environment.
    pub fn build_http_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Point the client at a different API root (proxies, fakes)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    pub fn build_request(request: &GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(request.user.clone())],
            system_instruction: GeminiContent::system(request.system.clone()),
            generation_config: GenerationConfig {
                temperature: request.sampling.temperature,
                top_k: request.sampling.top_k,
                top_p: request.sampling.top_p,
            },
        }
    }

    async fn call(&self, request_id: &str, request: &GenerationRequest) -> Result<String, GenerateFailure> {
        let body = Self::build_request(request);
        debug!(request_id = %request_id, url = %self.endpoint(), "Sending Gemini request");

        // Gemini authenticates via query-string key, not a Bearer header
        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();
        let text = response.text().await.map_err(redact)?;

        if !status.is_success() {
            return Err(GenerateFailure::Status { status, body: text });
        }

        let data: GeminiResponse = serde_json::from_str(&text)
            .map_err(|e| GenerateFailure::Malformed(format!("Failed to parse Gemini response: {}", e)))?;

        extract_text(&data)
    }
}

/// reqwest errors carry the request URL, which includes the API key
fn redact(error: reqwest::Error) -> GenerateFailure {
    GenerateFailure::Transport(error.without_url())
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> GenerateResult {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        info!(
            request_id = %request_id,
            model = %self.model,
            temperature = request.sampling.temperature,
            "Starting Gemini prompt generation"
        );

        let result = self.call(&request_id, request).await;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        match &result {
            Ok(text) => info!(
                request_id = %request_id,
                duration_ms,
                chars = text.len(),
                "Gemini generation completed"
            ),
            Err(e) => warn!(
                request_id = %request_id,
                duration_ms,
                error = %e,
                "Gemini generation failed"
            ),
        }

        result.into()
    }
}
