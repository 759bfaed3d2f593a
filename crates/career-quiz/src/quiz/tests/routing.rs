use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::quiz::router::{submit_handler, SubmitQuizRequest, USER_ID_HEADER};
use crate::quiz::QuizService;

fn submit_request(body: Value, user_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::post("/api/v1/quiz/submit")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(user_id) = user_id {
        builder = builder.header(USER_ID_HEADER, user_id);
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).expect("serializable")))
        .expect("request builds")
}

#[tokio::test]
async fn questions_route_serves_each_tier() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let mock = router
        .clone()
        .oneshot(
            Request::get("/api/v1/quiz/questions/mock")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(mock.status(), StatusCode::OK);
    let payload = read_json_body(mock).await;
    assert_eq!(payload["quizType"], "mock");
    assert_eq!(payload["total"], 5);

    let detailed = router
        .oneshot(
            Request::get("/api/v1/quiz/questions/detailed")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let payload = read_json_body(detailed).await;
    assert_eq!(payload["questions"].as_array().map(Vec::len), Some(15));
}

#[tokio::test]
async fn questions_route_rejects_unknown_tier() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/quiz/questions/expert")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|error| error.contains("unknown quiz tier 'expert'")));
}

#[tokio::test]
async fn submit_route_returns_camel_case_record() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let body = json!({
        "answers": [
            { "questionId": "mock_q1", "selectedOption": "b" },
            { "questionId": "mock_q2", "selectedOption": "a" },
            { "questionId": "mock_q3", "selectedOption": "b" },
            { "questionId": "mock_q4", "selectedOption": "d" },
            { "questionId": "mock_q5", "selectedOption": "a" }
        ],
        "completionTime": 312
    });

    let response = router
        .oneshot(submit_request(body, Some("student-9")))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["userType"], "authenticated");
    assert_eq!(payload["quizType"], "mock");
    assert_eq!(payload["personalityType"], "Analyst");
    assert_eq!(payload["scores"]["analytical"], 11);
    assert_eq!(payload["scores"]["technical"], 7);
    assert_eq!(payload["completionTime"], 312);
    assert_eq!(payload["answers"][0]["category"], "interests");
    assert!(payload["recommendedCourses"][0]["match"].is_u64());
    assert!(payload["areasForImprovement"].is_array());
    assert!(payload["submittedAt"].is_string());
}

#[tokio::test]
async fn submit_route_rejects_empty_answers() {
    let (service, repository) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(submit_request(json!({ "answers": [] }), None))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|error| error.contains("at least one answer")));
    assert_eq!(repository.len(), 0);
}

#[tokio::test]
async fn submit_route_treats_missing_answers_as_empty() {
    let (service, repository) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(submit_request(json!({}), None))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|error| error.contains("at least one answer")));
    assert_eq!(repository.len(), 0);
}

#[tokio::test]
async fn strict_submit_route_rejects_unknown_option() {
    let repository = Arc::new(MemoryRepository::default());
    let router = router_with_service(QuizService::new(repository.clone(), strict_config()));

    let response = router
        .oneshot(submit_request(
            json!({
                "answers": [
                    { "questionId": "mock_q1", "selectedOption": "b" },
                    { "questionId": "mock_q2", "selectedOption": "x" }
                ]
            }),
            None,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|error| error.contains("malformed answer")));
    assert_eq!(repository.len(), 0);
}

#[tokio::test]
async fn submit_handler_treats_blank_identity_as_guest() {
    let (service, _) = build_service();
    let mut headers = HeaderMap::new();
    headers.insert(USER_ID_HEADER, "   ".parse().expect("header value"));
    let request = SubmitQuizRequest {
        answers: mock_answers(),
        completion_time: None,
        session_id: Some("anon-1".to_string()),
    };

    let response = submit_handler(State(Arc::new(service)), headers, axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["userType"], "guest");
    assert_eq!(payload["sessionId"], "anon-1");
}

#[tokio::test]
async fn submit_handler_still_answers_when_storage_is_down() {
    let service = Arc::new(QuizService::new(
        Arc::new(UnavailableRepository),
        quiz_config(),
    ));
    let request = SubmitQuizRequest {
        answers: mock_answers(),
        ..SubmitQuizRequest::default()
    };

    let response = submit_handler(State(service), HeaderMap::new(), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["persisted"], false);
}

#[tokio::test]
async fn result_route_round_trips_and_reports_missing() {
    let (service, _) = build_service();
    let stored = service
        .submit(guest_submission(mock_answers()))
        .expect("submission accepted");
    let router = router_with_service(service);

    let found = router
        .clone()
        .oneshot(
            Request::get(format!("/api/v1/quiz/results/{}", stored.id))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(found.status(), StatusCode::OK);
    let payload = read_json_body(found).await;
    assert_eq!(payload["id"], stored.id.0);

    let missing = router
        .oneshot(
            Request::get("/api/v1/quiz/results/quiz-missing")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn history_and_stats_routes_respond() {
    let (service, _) = build_service();
    service
        .submit(member_submission(mock_answers(), "student-4"))
        .expect("submission accepted");
    let router = router_with_service(service);

    let history = router
        .clone()
        .oneshot(
            Request::get("/api/v1/quiz/history/student-4")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(history.status(), StatusCode::OK);
    let payload = read_json_body(history).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(1));

    let stats = router
        .oneshot(
            Request::get("/api/v1/quiz/stats")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let payload = read_json_body(stats).await;
    assert_eq!(payload["totalSubmissions"], 1);
    assert_eq!(payload["byUserType"]["authenticated"], 1);
}
