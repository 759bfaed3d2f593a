mod policy;
mod rules;

pub use rules::ResolvedAnswer;

use super::bank::QuestionBank;
use super::domain::{Answer, PersonalityType, QuizTier, ScoreVector};

/// Stateless engine folding answers into trait scores and a personality.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    bank: &'static QuestionBank,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(QuestionBank::standard())
    }
}

impl ScoringEngine {
    pub fn new(bank: &'static QuestionBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &'static QuestionBank {
        self.bank
    }

    /// Unresolvable answers are skipped rather than failing the whole fold.
    pub fn score(&self, answers: &[Answer], tier: QuizTier) -> ScoreVector {
        rules::accumulate(self.bank, answers, tier).scores
    }

    /// Like [`score`](Self::score), but also reports which answers counted.
    pub fn score_detailed(&self, answers: &[Answer], tier: QuizTier) -> ScoreBreakdown {
        rules::accumulate(self.bank, answers, tier)
    }

    pub fn classify(&self, scores: &ScoreVector) -> PersonalityType {
        policy::classify(scores)
    }
}

/// Scores plus the per-answer resolution trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub scores: ScoreVector,
    pub resolved: Vec<ResolvedAnswer>,
}

impl ScoreBreakdown {
    pub fn skipped(&self) -> usize {
        self.resolved
            .iter()
            .filter(|answer| answer.outcome.is_err())
            .count()
    }
}
