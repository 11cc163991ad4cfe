// src/prompt/builder.rs
use super::context::PromptContext;

/// Builds the system instruction: persona plus hard output constraints
pub fn build_system_instruction(max_words: usize) -> String {
    let mut prompt = String::new();

    prompt.push_str("You write the daily drawing prompt for a playful social sketching app. ");
    prompt.push_str("You are terminally online and fluent in meme culture, internet trends and group chat humor.\n\n");

    prompt.push_str("Rules:\n");
    prompt.push_str("- Reply with exactly ONE prompt and nothing else.\n");
    prompt.push_str(&format!("- The prompt must be under {} words.\n", max_words));
    prompt.push_str("- No quotation marks, no lists, no numbering, no hashtags, no explanations.\n");
    prompt.push_str("- Keep it vague enough to interpret freely but visual enough to draw.\n");
    prompt.push_str("- Lean on online culture and memes without naming real people.\n");

    prompt
}

/// Builds the user instruction for one generation, embedding the sampled context
pub fn build_user_instruction(context: &PromptContext, max_words: usize) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!("Write today's prompt in a {} tone.\n", context.tone));
    prompt.push_str(&format!("Trending right now: {}.\n", context.trend_keywords));
    prompt.push_str(&format!("{}\n", context.season.context()));
    prompt.push_str(&format!("Stay under {} words.\n", max_words));

    if !context.examples.is_empty() {
        prompt.push_str("\nMatch the style of these examples without copying them:\n");
        for example in &context.examples {
            prompt.push_str(&format!("- {}\n", example));
        }
    }

    prompt
}
