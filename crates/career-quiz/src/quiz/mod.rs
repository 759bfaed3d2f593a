//! Career quiz: question bank, trait scoring, personality classification,
//! recommendation lookup, and result assembly.

pub mod bank;
pub mod config;
pub mod domain;
pub mod recommendations;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod stats;

#[cfg(test)]
mod tests;

pub use bank::{QuestionBank, QuestionBankError, QuestionView};
pub use config::{AnswerPolicy, CompletionTimeFallback, QuizConfig};
pub use domain::{
    Answer, AnsweredQuestion, CourseRecommendation, LearningResource, PersonalityType,
    QuizResult, QuizResultId, QuizSubmission, QuizTier, ScoreVector, TraitName, UserType,
};
pub use recommendations::{PersonalityProfile, RecommendationCatalog, Recommendations};
pub use repository::{QuizResultRepository, RepositoryError};
pub use router::{quiz_router, SubmitQuizRequest, USER_ID_HEADER};
pub use scoring::{ResolvedAnswer, ScoreBreakdown, ScoringEngine};
pub use service::{QuizService, QuizServiceError};
pub use stats::QuizStatistics;
