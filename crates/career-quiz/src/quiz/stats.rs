use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{PersonalityType, QuizResult, QuizTier, UserType};

/// Aggregate view over stored results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStatistics {
    pub total_submissions: usize,
    pub by_personality: BTreeMap<&'static str, usize>,
    pub by_quiz_type: BTreeMap<&'static str, usize>,
    pub by_user_type: BTreeMap<&'static str, usize>,
    pub average_completion_time: Option<f64>,
}

impl QuizStatistics {
    pub fn from_results(results: &[QuizResult]) -> Self {
        let mut by_personality: BTreeMap<&'static str, usize> = PersonalityType::ALL
            .iter()
            .map(|personality| (personality.label(), 0))
            .collect();
        let mut by_quiz_type: BTreeMap<&'static str, usize> = [QuizTier::Mock, QuizTier::Detailed]
            .iter()
            .map(|tier| (tier.label(), 0))
            .collect();
        let mut by_user_type: BTreeMap<&'static str, usize> =
            [UserType::Guest, UserType::Authenticated]
                .iter()
                .map(|user_type| (user_type.label(), 0))
                .collect();

        let mut completion_total: u64 = 0;
        for result in results {
            *by_personality
                .entry(result.personality_type.label())
                .or_default() += 1;
            *by_quiz_type.entry(result.quiz_type.label()).or_default() += 1;
            *by_user_type.entry(result.user_type.label()).or_default() += 1;
            completion_total += u64::from(result.completion_time);
        }

        let average_completion_time = if results.is_empty() {
            None
        } else {
            Some(completion_total as f64 / results.len() as f64)
        };

        Self {
            total_submissions: results.len(),
            by_personality,
            by_quiz_type,
            by_user_type,
            average_completion_time,
        }
    }
}
