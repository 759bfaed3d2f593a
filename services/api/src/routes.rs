use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use career_quiz::quiz::{quiz_router, QuestionBank, QuizResultRepository, QuizService, QuizTier};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) fn with_quiz_routes<R>(service: Arc<QuizService<R>>) -> axum::Router
where
    R: QuizResultRepository + 'static,
{
    quiz_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Ready once the server has bound; also reports the question counts per tier.
pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let bank = QuestionBank::standard();
    let questions = json!({
        "mock": bank.questions(QuizTier::Mock).len(),
        "detailed": bank.questions(QuizTier::Detailed).len(),
    });

    if state.readiness.load(Ordering::Relaxed) {
        (
            StatusCode::OK,
            Json(json!({ "status": "ready", "questions": questions })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "starting", "questions": questions })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryQuizResultRepository;
    use axum::body::Body;
    use axum::http::Request;
    use career_quiz::quiz::QuizConfig;
    use tower::ServiceExt;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_reports_bank_sizes() {
        let state = AppState {
            readiness: Arc::new(std::sync::atomic::AtomicBool::new(false)),
            metrics: Arc::new(
                metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder().handle(),
            ),
        };

        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Relaxed);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .expect("read body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["questions"]["mock"], 5);
        assert_eq!(body["questions"]["detailed"], 15);
    }

    #[tokio::test]
    async fn quiz_routes_are_mounted_alongside_health() {
        let service = Arc::new(QuizService::new(
            Arc::new(InMemoryQuizResultRepository::default()),
            QuizConfig::default(),
        ));
        let router = with_quiz_routes(service);

        let response = router
            .clone()
            .oneshot(
                Request::get("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::get("/api/v1/quiz/questions/mock")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
