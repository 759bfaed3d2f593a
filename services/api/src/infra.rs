use career_quiz::quiz::{Answer, QuizResult, QuizResultId, QuizResultRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct ResultStore {
    records: HashMap<QuizResultId, QuizResult>,
    insertion_order: Vec<QuizResultId>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryQuizResultRepository {
    store: Arc<Mutex<ResultStore>>,
}

impl QuizResultRepository for InMemoryQuizResultRepository {
    fn insert(&self, record: QuizResult) -> Result<QuizResult, RepositoryError> {
        let mut guard = self.store.lock().expect("repository mutex poisoned");
        if guard.records.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insertion_order.push(record.id.clone());
        guard.records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &QuizResultId) -> Result<Option<QuizResult>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard.records.get(id).cloned())
    }

    fn for_user(&self, user_id: &str) -> Result<Vec<QuizResult>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard
            .insertion_order
            .iter()
            .rev()
            .filter_map(|id| guard.records.get(id))
            .filter(|record| record.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<QuizResult>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard
            .insertion_order
            .iter()
            .filter_map(|id| guard.records.get(id))
            .cloned()
            .collect())
    }
}

/// Parses a `question=option` pair as passed on the command line.
pub(crate) fn parse_answer(raw: &str) -> Result<Answer, String> {
    let (question, option) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=OPTION, got '{raw}'"))?;
    let (question, option) = (question.trim(), option.trim());
    if question.is_empty() || option.is_empty() {
        return Err(format!("expected QUESTION=OPTION, got '{raw}'"));
    }
    Ok(Answer::new(question, option))
}
