use super::domain::{QuizResult, QuizResultId};

/// Storage abstraction so the service can be exercised without a database.
pub trait QuizResultRepository: Send + Sync {
    fn insert(&self, record: QuizResult) -> Result<QuizResult, RepositoryError>;
    fn fetch(&self, id: &QuizResultId) -> Result<Option<QuizResult>, RepositoryError>;
    /// Results submitted by a user, newest first.
    fn for_user(&self, user_id: &str) -> Result<Vec<QuizResult>, RepositoryError>;
    fn all(&self) -> Result<Vec<QuizResult>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
