// src/llm/gemini/extraction.rs
// Pull the prompt text out of a Gemini response

use crate::llm::gemini::types::GeminiResponse;
use crate::llm::provider::GenerateFailure;

/// First text part of the first candidate, trimmed
pub fn extract_text(response: &GeminiResponse) -> Result<String, GenerateFailure> {
    let candidate = response
        .candidates
        .as_ref()
        .and_then(|c| c.first())
        .ok_or(GenerateFailure::NoCandidates)?;

    let text = candidate
        .content
        .as_ref()
        .and_then(|content| content.parts.as_ref())
        .and_then(|parts| parts.iter().find_map(|p| p.text.as_deref()))
        .ok_or_else(|| {
            GenerateFailure::Malformed(format!(
                "candidate has no text part (finishReason: {})",
                candidate.finish_reason.as_deref().unwrap_or("none")
            ))
        })?;

    let cleaned = clean_prompt(text);
    if cleaned.is_empty() {
        return Err(GenerateFailure::EmptyText);
    }
    Ok(cleaned)
}

/// Trim whitespace and one pair of wrapping quotes
pub fn clean_prompt(text: &str) -> String {
    let trimmed = text.trim();
    let unquoted = [('"', '"'), ('\'', '\''), ('\u{201C}', '\u{201D}')]
        .iter()
        .find_map(|(open, close)| {
            trimmed
                .strip_prefix(*open)
                .and_then(|rest| rest.strip_suffix(*close))
        })
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}
