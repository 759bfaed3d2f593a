use super::super::bank::{QuestionBank, QuestionBankError, TraitWeights};
use super::super::domain::{Answer, QuizTier, ScoreVector};
use super::ScoreBreakdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnswer {
    pub question_id: String,
    pub selected_option: String,
    pub outcome: Result<TraitWeights, QuestionBankError>,
}

pub(crate) fn accumulate(
    bank: &QuestionBank,
    answers: &[Answer],
    tier: QuizTier,
) -> ScoreBreakdown {
    let mut scores = ScoreVector::default();
    let mut resolved = Vec::with_capacity(answers.len());

    for answer in answers {
        let outcome = bank.resolve_weight(tier, &answer.question_id, &answer.selected_option);
        if let Ok(weights) = &outcome {
            for (name, weight) in weights.iter() {
                scores.add(*name, *weight);
            }
        }

        resolved.push(ResolvedAnswer {
            question_id: answer.question_id.clone(),
            selected_option: answer.selected_option.clone(),
            outcome,
        });
    }

    ScoreBreakdown { scores, resolved }
}
