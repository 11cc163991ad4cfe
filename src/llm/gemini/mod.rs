// src/llm/gemini/mod.rs
// Google Gemini provider

mod client;
mod extraction;
mod types;

pub use client::{DEFAULT_MODEL, GEMINI_API_BASE, GeminiClient};
pub use extraction::{clean_prompt, extract_text};
pub use types::{GeminiRequest, GeminiResponse};
