use crate::config::ConfigError;
use crate::quiz::{QuizServiceError, RepositoryError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Quiz(QuizServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Quiz(err) => write!(f, "quiz error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Quiz(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Quiz(QuizServiceError::EmptySubmission)
            | AppError::Quiz(QuizServiceError::MalformedAnswer(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Quiz(QuizServiceError::UnknownTier(_))
            | AppError::Quiz(QuizServiceError::Repository(RepositoryError::NotFound)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Quiz(QuizServiceError::Repository(_))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<QuizServiceError> for AppError {
    fn from(value: QuizServiceError) -> Self {
        Self::Quiz(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuestionBankError;

    #[test]
    fn quiz_errors_map_to_client_statuses() {
        assert_eq!(
            AppError::from(QuizServiceError::EmptySubmission).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(QuizServiceError::MalformedAnswer(
                QuestionBankError::UnknownOption {
                    question_id: "mock_q2".to_string(),
                    option_id: "x".to_string(),
                }
            ))
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(QuizServiceError::UnknownTier("expert".to_string())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(QuizServiceError::Repository(RepositoryError::NotFound)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(QuizServiceError::Repository(RepositoryError::Unavailable(
                "offline".to_string()
            )))
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
