use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::bank::QuestionView;
use super::domain::{Answer, QuizResultId, QuizSubmission, QuizTier};
use super::repository::QuizResultRepository;
use super::service::{QuizService, QuizServiceError};

/// Header carrying the caller identity resolved by the upstream auth layer.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Body accepted by the submit endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub completion_time: Option<u32>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetResponse {
    pub quiz_type: QuizTier,
    pub total: usize,
    pub questions: Vec<QuestionView>,
}

/// Router builder exposing the quiz endpoints.
pub fn quiz_router<R>(service: Arc<QuizService<R>>) -> Router
where
    R: QuizResultRepository + 'static,
{
    Router::new()
        .route("/api/v1/quiz/questions/:tier", get(questions_handler::<R>))
        .route("/api/v1/quiz/submit", post(submit_handler::<R>))
        .route("/api/v1/quiz/results/:result_id", get(result_handler::<R>))
        .route("/api/v1/quiz/history/:user_id", get(history_handler::<R>))
        .route("/api/v1/quiz/stats", get(stats_handler::<R>))
        .with_state(service)
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Path(tier): Path<String>,
) -> Response
where
    R: QuizResultRepository + 'static,
{
    let Some(tier) = QuizTier::parse(&tier) else {
        return AppError::from(QuizServiceError::UnknownTier(tier)).into_response();
    };

    let questions = service.questions(tier);
    let body = QuestionSetResponse {
        quiz_type: tier,
        total: questions.len(),
        questions,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<SubmitQuizRequest>,
) -> Response
where
    R: QuizResultRepository + 'static,
{
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    let submission = QuizSubmission {
        answers: request.answers,
        completion_time: request.completion_time,
        session_id: request.session_id,
        user_id,
    };

    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Path(result_id): Path<String>,
) -> Response
where
    R: QuizResultRepository + 'static,
{
    match service.get(&QuizResultId(result_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: QuizResultRepository + 'static,
{
    match service.history(&user_id) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn stats_handler<R>(State(service): State<Arc<QuizService<R>>>) -> Response
where
    R: QuizResultRepository + 'static,
{
    match service.statistics() {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}
