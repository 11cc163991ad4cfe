// src/llm/mod.rs
// LLM backends for prompt generation

pub mod gemini;
pub mod provider;

pub use gemini::GeminiClient;
pub use provider::{GenerateFailure, GenerateResult, GenerationRequest, SamplingConfig, TextGenerator};
