use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How submissions referencing unknown questions or options are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerPolicy {
    /// Skip unresolved answers and score the rest.
    #[default]
    Lenient,
    /// Reject the whole submission.
    Strict,
}

impl AnswerPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lenient" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// Source of `completionTime` when the client leaves it out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionTimeFallback {
    #[default]
    Random,
    Fixed(u32),
}

impl CompletionTimeFallback {
    pub const RANDOM_RANGE: RangeInclusive<u32> = 300..=600;

    pub fn resolve(&self) -> u32 {
        match self {
            CompletionTimeFallback::Random => rand::thread_rng().gen_range(Self::RANDOM_RANGE),
            CompletionTimeFallback::Fixed(seconds) => *seconds,
        }
    }
}

/// Settings for the result assembler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub answer_policy: AnswerPolicy,
    pub completion_time_fallback: CompletionTimeFallback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_fallback_stays_in_range() {
        for _ in 0..64 {
            let seconds = CompletionTimeFallback::Random.resolve();
            assert!(CompletionTimeFallback::RANDOM_RANGE.contains(&seconds));
        }
    }

    #[test]
    fn answer_policy_parses_case_insensitively() {
        assert_eq!(AnswerPolicy::parse(" Strict "), Some(AnswerPolicy::Strict));
        assert_eq!(AnswerPolicy::parse("LENIENT"), Some(AnswerPolicy::Lenient));
        assert_eq!(AnswerPolicy::parse("fail-fast"), None);
    }
}
