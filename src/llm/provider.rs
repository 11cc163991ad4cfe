// src/llm/provider.rs
// Text generation backend abstraction

use async_trait::async_trait;
use reqwest::StatusCode;

/// Sampling parameters sent with every generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for SamplingConfig {
    /// High temperature on purpose: variety matters more than determinism here
    fn default() -> Self {
        Self {
            temperature: 1.4,
            top_k: 60,
            top_p: 0.95,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system: String,
    pub user: String,
    pub sampling: SamplingConfig,
}

/// Why a generation produced no usable text
#[derive(Debug, thiserror::Error)]
pub enum GenerateFailure {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Response had no candidates")]
    NoCandidates,

    #[error("Response text was empty")]
    EmptyText,
}

/// Outcome of one generation call. Substituting a fallback is the caller's decision.
#[derive(Debug)]
pub enum GenerateResult {
    Generated(String),
    Failed(GenerateFailure),
}

impl From<Result<String, GenerateFailure>> for GenerateResult {
    fn from(result: Result<String, GenerateFailure>) -> Self {
        match result {
            Ok(text) => GenerateResult::Generated(text),
            Err(reason) => GenerateResult::Failed(reason),
        }
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, request: &GenerationRequest) -> GenerateResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sampling() {
        let sampling = SamplingConfig::default();
        assert_eq!(sampling.temperature, 1.4);
        assert_eq!(sampling.top_k, 60);
        assert_eq!(sampling.top_p, 0.95);
    }

    #[test]
    fn test_result_from_std_result() {
        let ok: GenerateResult = Ok::<_, GenerateFailure>("hi".to_string()).into();
        assert!(matches!(ok, GenerateResult::Generated(t) if t == "hi"));

        let failed: GenerateResult = Err::<String, _>(GenerateFailure::NoCandidates).into();
        assert!(matches!(failed, GenerateResult::Failed(GenerateFailure::NoCandidates)));
    }
}
