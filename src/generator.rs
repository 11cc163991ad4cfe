// src/generator.rs
//! Prompt Generator.
//!
//! Samples a creative context, asks the backend for one short prompt, and
//! falls back to a fixed list when the backend yields nothing usable.
//! [`PromptGenerator::generate`] has no error path.

use std::sync::Arc;

use tracing::{info, warn};

use crate::llm::{GenerateResult, GenerationRequest, SamplingConfig, TextGenerator};
use crate::prompt::tables::{FALLBACK_PROMPTS, MAX_PROMPT_WORDS};
use crate::prompt::{PromptContext, Selector, ThreadRngSelector, build_system_instruction, build_user_instruction};

/// Where a served prompt came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSource {
    /// Stored record for today, no generation
    Cached,
    /// Fresh text from the backend
    Generated,
    /// Backend failed, fixed fallback used
    Fallback,
}

impl PromptSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptSource::Cached => "cached",
            PromptSource::Generated => "generated",
            PromptSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPrompt {
    pub text: String,
    pub source: PromptSource,
}

pub struct PromptGenerator {
    backend: Arc<dyn TextGenerator>,
    selector: Arc<dyn Selector>,
    sampling: SamplingConfig,
    max_words: usize,
}

impl PromptGenerator {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self::with_selector(backend, Arc::new(ThreadRngSelector))
    }

    pub fn with_selector(backend: Arc<dyn TextGenerator>, selector: Arc<dyn Selector>) -> Self {
        Self {
            backend,
            selector,
            sampling: SamplingConfig::default(),
            max_words: MAX_PROMPT_WORDS,
        }
    }

    pub fn build_request(&self, context: &PromptContext) -> GenerationRequest {
        GenerationRequest {
            system: build_system_instruction(self.max_words),
            user: build_user_instruction(context, self.max_words),
            sampling: self.sampling,
        }
    }

    /// Produce one prompt for the given canonical month (0-11)
    pub async fn generate(&self, month0: u32) -> GeneratedPrompt {
        let context = PromptContext::select(month0, self.selector.as_ref());
        info!(
            backend = self.backend.name(),
            tone = context.tone,
            trend = context.trend_keywords,
            season = ?context.season,
            "Generating daily prompt"
        );

        let request = self.build_request(&context);
        match self.backend.generate(&request).await {
            GenerateResult::Generated(text) if !text.trim().is_empty() => GeneratedPrompt {
                text: text.trim().to_string(),
                source: PromptSource::Generated,
            },
            GenerateResult::Generated(_) => {
                warn!(backend = self.backend.name(), "Backend returned blank text, using fallback prompt");
                self.fallback()
            }
            GenerateResult::Failed(reason) => {
                warn!(backend = self.backend.name(), error = %reason, "Prompt generation failed, using fallback prompt");
                self.fallback()
            }
        }
    }

    pub fn fallback(&self) -> GeneratedPrompt {
        GeneratedPrompt {
            text: FALLBACK_PROMPTS[self.selector.pick(FALLBACK_PROMPTS.len())].to_string(),
            source: PromptSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::GenerateFailure;
    use crate::prompt::SeededSelector;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend that replays one canned answer and records the request
    struct CannedBackend {
        answer: Mutex<Option<GenerateResult>>,
        seen: Mutex<Vec<GenerationRequest>>,
    }

    impl CannedBackend {
        fn new(answer: GenerateResult) -> Arc<Self> {
            Arc::new(Self {
                answer: Mutex::new(Some(answer)),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for CannedBackend {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn generate(&self, request: &GenerationRequest) -> GenerateResult {
            self.seen.lock().unwrap().push(request.clone());
            self.answer
                .lock()
                .unwrap()
                .take()
                .unwrap_or(GenerateResult::Failed(GenerateFailure::NoCandidates))
        }
    }

    #[tokio::test]
    async fn test_generated_text_is_trimmed() {
        let backend = CannedBackend::new(GenerateResult::Generated("  A pigeon with a podcast. \n".into()));
        let generator = PromptGenerator::new(backend.clone());

        let prompt = generator.generate(5).await;
        assert_eq!(prompt.text, "A pigeon with a podcast.");
        assert_eq!(prompt.source, PromptSource::Generated);
    }

    #[tokio::test]
    async fn test_request_carries_sampling_and_instructions() {
        let backend = CannedBackend::new(GenerateResult::Generated("ok".into()));
        let generator = PromptGenerator::with_selector(backend.clone(), Arc::new(SeededSelector::new(1)));

        generator.generate(0).await;

        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].sampling, SamplingConfig::default());
        assert!(seen[0].system.contains("under 15 words"));
        assert!(seen[0].user.contains("winter"));
    }

    #[tokio::test]
    async fn test_failure_uses_fallback() {
        let backend = CannedBackend::new(GenerateResult::Failed(GenerateFailure::Malformed("bad".into())));
        let generator = PromptGenerator::new(backend);

        let prompt = generator.generate(3).await;
        assert_eq!(prompt.source, PromptSource::Fallback);
        assert!(FALLBACK_PROMPTS.contains(&prompt.text.as_str()));
        assert!(!prompt.text.is_empty());
    }

    #[tokio::test]
    async fn test_blank_generation_uses_fallback() {
        let backend = CannedBackend::new(GenerateResult::Generated("   ".into()));
        let generator = PromptGenerator::new(backend);

        let prompt = generator.generate(3).await;
        assert_eq!(prompt.source, PromptSource::Fallback);
        assert!(FALLBACK_PROMPTS.contains(&prompt.text.as_str()));
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(PromptSource::Cached.as_str(), "cached");
        assert_eq!(PromptSource::Generated.as_str(), "generated");
        assert_eq!(PromptSource::Fallback.as_str(), "fallback");
    }
}
