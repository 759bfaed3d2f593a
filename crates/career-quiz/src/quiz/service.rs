use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::bank::{QuestionBank, QuestionBankError, QuestionView};
use super::config::{AnswerPolicy, QuizConfig};
use super::domain::{
    AnsweredQuestion, QuizResult, QuizResultId, QuizSubmission, QuizTier, UserType,
};
use super::recommendations::RecommendationCatalog;
use super::repository::{QuizResultRepository, RepositoryError};
use super::scoring::{ResolvedAnswer, ScoringEngine};
use super::stats::QuizStatistics;

/// Service composing the scoring engine, recommendation tables, and repository.
pub struct QuizService<R> {
    engine: ScoringEngine,
    catalog: &'static RecommendationCatalog,
    repository: Arc<R>,
    config: QuizConfig,
}

static RESULT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_sequence() -> u64 {
    RESULT_SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

impl<R> QuizService<R>
where
    R: QuizResultRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: QuizConfig) -> Self {
        Self::with_catalog(repository, config, RecommendationCatalog::standard())
    }

    pub fn with_catalog(
        repository: Arc<R>,
        config: QuizConfig,
        catalog: &'static RecommendationCatalog,
    ) -> Self {
        Self {
            engine: ScoringEngine::default(),
            catalog,
            repository,
            config,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn questions(&self, tier: QuizTier) -> Vec<QuestionView> {
        self.engine
            .bank()
            .questions(tier)
            .into_iter()
            .map(|question| question.view())
            .collect()
    }

    /// Score a submission and persist it. A storage failure still returns the
    /// record, marked unsaved, with a synthetic id.
    pub fn submit(&self, submission: QuizSubmission) -> Result<QuizResult, QuizServiceError> {
        if submission.answers.is_empty() {
            return Err(QuizServiceError::EmptySubmission);
        }

        let QuizSubmission {
            answers,
            completion_time,
            session_id,
            user_id,
        } = submission;

        let tier = QuizTier::from_answer_count(answers.len());
        let breakdown = self.engine.score_detailed(&answers, tier);

        if self.config.answer_policy == AnswerPolicy::Strict {
            if let Some(Err(error)) = breakdown
                .resolved
                .iter()
                .map(|answer| &answer.outcome)
                .find(|outcome| outcome.is_err())
            {
                return Err(QuizServiceError::MalformedAnswer(error.clone()));
            }
        }

        let personality = self.engine.classify(&breakdown.scores);
        let recommendations = self.catalog.recommend(personality);
        let annotated = annotate(self.engine.bank(), &breakdown.resolved);

        let user_type = if user_id.is_some() {
            UserType::Authenticated
        } else {
            UserType::Guest
        };
        let session_id = if user_id.is_some() { None } else { session_id };
        let completion_time =
            completion_time.unwrap_or_else(|| self.config.completion_time_fallback.resolve());

        let record = QuizResult {
            id: QuizResultId(format!("quiz-{:06}", next_sequence())),
            user_id,
            session_id,
            user_type,
            quiz_type: tier,
            answers: annotated,
            scores: breakdown.scores,
            personality_type: personality,
            recommended_courses: recommendations.courses,
            strengths: recommendations.strengths,
            areas_for_improvement: recommendations.areas_for_improvement,
            next_steps: recommendations.next_steps,
            resources: recommendations.resources,
            completion_time,
            submitted_at: Utc::now(),
            persisted: true,
        };

        match self.repository.insert(record.clone()) {
            Ok(stored) => {
                info!(
                    result_id = %stored.id,
                    quiz_type = %stored.quiz_type,
                    personality = %stored.personality_type,
                    skipped = breakdown.skipped(),
                    "quiz result stored"
                );
                Ok(stored)
            }
            Err(error) => {
                let unsaved = QuizResult {
                    id: QuizResultId(format!("unsaved-{:06}", next_sequence())),
                    persisted: false,
                    ..record
                };
                warn!(
                    %error,
                    result_id = %unsaved.id,
                    "failed to persist quiz result; returning unsaved record"
                );
                Ok(unsaved)
            }
        }
    }

    pub fn get(&self, id: &QuizResultId) -> Result<QuizResult, QuizServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn history(&self, user_id: &str) -> Result<Vec<QuizResult>, QuizServiceError> {
        Ok(self.repository.for_user(user_id)?)
    }

    pub fn statistics(&self) -> Result<QuizStatistics, QuizServiceError> {
        let results = self.repository.all()?;
        Ok(QuizStatistics::from_results(&results))
    }
}

fn annotate(bank: &QuestionBank, resolved: &[ResolvedAnswer]) -> Vec<AnsweredQuestion> {
    resolved
        .iter()
        .map(|answer| {
            let question = bank.question(&answer.question_id);
            AnsweredQuestion {
                question_id: answer.question_id.clone(),
                question: question.map(|question| question.prompt.to_string()),
                selected_option: answer.selected_option.clone(),
                category: question.map(|question| question.category.to_string()),
            }
        })
        .collect()
}

/// Error raised by the quiz service.
#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error("submission must contain at least one answer")]
    EmptySubmission,
    #[error("unknown quiz tier '{0}' (expected mock or detailed)")]
    UnknownTier(String),
    #[error("malformed answer: {0}")]
    MalformedAnswer(QuestionBankError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
