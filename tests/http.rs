mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use common::{assert_error, TestApp};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn unknown_path_answers_json_not_found() {
    let app = TestApp::seeded(1).await;
    let (status, body) = app.get("/nowhere").await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resource Not Found");
}

#[tokio::test]
async fn wrong_method_answers_json_method_not_allowed() {
    let app = TestApp::seeded(1).await;
    for (method, uri) in [
        (Method::PATCH, "/questions"),
        (Method::GET, "/questions/1"),
        (Method::DELETE, "/categories"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_error(status, &body, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["message"], "method not allowed");
    }
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let app = TestApp::seeded(1).await;
    let request = Request::builder()
        .uri("/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn preflight_lists_methods_and_headers() {
    let app = TestApp::seeded(1).await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/questions/1")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_success());

    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_owned();
    for method in ["GET", "PUT", "POST", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "{method} missing from {methods}");
    }
    let headers = response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(headers.contains("content-type"));
    assert!(headers.contains("authorization"));
}

#[tokio::test]
async fn metrics_are_exposed() {
    let app = TestApp::seeded(2).await;
    app.post(
        "/quizzes",
        json!({"quiz_category": {"id": 0}, "previous_questions": []}),
    )
    .await;

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("trivia_quiz_questions_served_total"));
}
