use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::quiz::config::{AnswerPolicy, CompletionTimeFallback, QuizConfig};
use crate::quiz::domain::{Answer, QuizResult, QuizResultId, QuizSubmission};
use crate::quiz::repository::{QuizResultRepository, RepositoryError};
use crate::quiz::{quiz_router, QuizService};

pub(super) const FIXED_COMPLETION_SECONDS: u32 = 450;

pub(super) fn quiz_config() -> QuizConfig {
    QuizConfig {
        answer_policy: AnswerPolicy::Lenient,
        completion_time_fallback: CompletionTimeFallback::Fixed(FIXED_COMPLETION_SECONDS),
    }
}

pub(super) fn strict_config() -> QuizConfig {
    QuizConfig {
        answer_policy: AnswerPolicy::Strict,
        ..quiz_config()
    }
}

/// Analyst-leaning guest run through the five mock questions.
pub(super) fn mock_answers() -> Vec<Answer> {
    vec![
        Answer::new("mock_q1", "b"),
        Answer::new("mock_q2", "a"),
        Answer::new("mock_q3", "b"),
        Answer::new("mock_q4", "d"),
        Answer::new("mock_q5", "a"),
    ]
}

/// Option `c` on every one of the fifteen detailed questions.
pub(super) fn all_c_detailed_answers() -> Vec<Answer> {
    let mut answers: Vec<Answer> = (1..=5)
        .map(|n| Answer::new(format!("mock_q{n}"), "c"))
        .collect();
    answers.extend((1..=10).map(|n| Answer::new(format!("detailed_q{n}"), "c")));
    answers
}

pub(super) fn guest_submission(answers: Vec<Answer>) -> QuizSubmission {
    QuizSubmission {
        answers,
        completion_time: None,
        session_id: Some("session-abc".to_string()),
        user_id: None,
    }
}

pub(super) fn member_submission(answers: Vec<Answer>, user_id: &str) -> QuizSubmission {
    QuizSubmission {
        answers,
        completion_time: Some(275),
        session_id: Some("ignored-session".to_string()),
        user_id: Some(user_id.to_string()),
    }
}

pub(super) fn build_service() -> (QuizService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = QuizService::new(repository.clone(), quiz_config());
    (service, repository)
}

pub(super) fn router_with_service(service: QuizService<MemoryRepository>) -> axum::Router {
    quiz_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<QuizResult>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl QuizResultRepository for MemoryRepository {
    fn insert(&self, record: QuizResult) -> Result<QuizResult, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &QuizResultId) -> Result<Option<QuizResult>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn for_user(&self, user_id: &str) -> Result<Vec<QuizResult>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|record| record.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<QuizResult>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}

pub(super) struct UnavailableRepository;

impl QuizResultRepository for UnavailableRepository {
    fn insert(&self, _record: QuizResult) -> Result<QuizResult, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &QuizResultId) -> Result<Option<QuizResult>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_user(&self, _user_id: &str) -> Result<Vec<QuizResult>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<QuizResult>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
