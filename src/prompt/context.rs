// src/prompt/context.rs
// Per-request creative context: tone, trend keywords, season, exemplars

use super::selector::Selector;
use super::tables::{EXAMPLE_PROMPTS, EXAMPLE_SAMPLE_SIZE, SEASONAL_CONTEXT, TONES, TRENDING_KEYWORDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Dec-Feb winter, Mar-May spring, Jun-Aug summer, Sep-Nov autumn
    pub fn from_month0(month0: u32) -> Self {
        match month0 % 12 {
            11 | 0 | 1 => Season::Winter,
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            _ => Season::Autumn,
        }
    }

    pub fn context(&self) -> &'static str {
        SEASONAL_CONTEXT[*self as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    pub tone: &'static str,
    pub trend_keywords: &'static str,
    pub season: Season,
    pub examples: Vec<&'static str>,
}

impl PromptContext {
    pub fn select(month0: u32, selector: &dyn Selector) -> Self {
        let trends = TRENDING_KEYWORDS[(month0 % 12) as usize];
        let trend_keywords = trends[selector.pick(trends.len())];
        let tone = TONES[selector.pick(TONES.len())];
        let examples = selector
            .sample(EXAMPLE_PROMPTS.len(), EXAMPLE_SAMPLE_SIZE)
            .into_iter()
            .map(|i| EXAMPLE_PROMPTS[i])
            .collect();

        Self {
            tone,
            trend_keywords,
            season: Season::from_month0(month0),
            examples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::selector::SeededSelector;

    /// Always the first entry; samples the first `amount` indices
    struct FirstSelector;

    impl Selector for FirstSelector {
        fn pick(&self, _len: usize) -> usize {
            0
        }

        fn sample(&self, len: usize, amount: usize) -> Vec<usize> {
            (0..amount.min(len)).collect()
        }
    }

    #[test]
    fn test_season_mapping() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Autumn,
            Season::Autumn,
            Season::Autumn,
            Season::Winter,
        ];
        for (month0, season) in expected.iter().enumerate() {
            assert_eq!(Season::from_month0(month0 as u32), *season, "month0 {}", month0);
        }
    }

    #[test]
    fn test_season_context_text() {
        assert!(Season::Winter.context().contains("winter"));
        assert!(Season::Autumn.context().contains("autumn"));
    }

    #[test]
    fn test_select_uses_month_table() {
        let ctx = PromptContext::select(9, &FirstSelector);
        assert_eq!(ctx.trend_keywords, TRENDING_KEYWORDS[9][0]);
        assert_eq!(ctx.tone, TONES[0]);
        assert_eq!(ctx.season, Season::Autumn);
        assert_eq!(ctx.examples, EXAMPLE_PROMPTS[..EXAMPLE_SAMPLE_SIZE].to_vec());
    }

    #[test]
    fn test_select_samples_five_distinct_examples() {
        let selector = SeededSelector::new(7);
        for month0 in 0..12 {
            let ctx = PromptContext::select(month0, &selector);
            assert_eq!(ctx.examples.len(), EXAMPLE_SAMPLE_SIZE);
            let mut unique = ctx.examples.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), EXAMPLE_SAMPLE_SIZE);
            assert!(TRENDING_KEYWORDS[month0 as usize].contains(&ctx.trend_keywords));
            assert!(TONES.contains(&ctx.tone));
        }
    }
}
