//! Route behavior tests against the full Axum router (no socket).

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use greeting_server::config::ServerConfig;
use greeting_server::greetings;
use greeting_server::http::{AppState, HttpServer};

fn app() -> Router {
    let state = AppState {
        routes: Arc::new(greetings::routes()),
    };
    HttpServer::build_router(&ServerConfig::default(), state)
}

async fn get(app: Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn root_returns_greeting() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello world!");
}

#[tokio::test]
async fn hello_echoes_name() {
    let (status, body) = get(app(), "/hello/Alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello Alice!");
}

#[tokio::test]
async fn hello_with_empty_segment_is_not_found() {
    let (status, _) = get(app(), "/hello/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _) = get(app(), "/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn name_is_passed_through_unescaped() {
    // Percent-encoded input stays encoded: the captured segment is
    // interpolated verbatim, with no decoding or sanitization.
    let (status, body) = get(app(), "/hello/%3Cscript%3E").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello %3Cscript%3E!");
}

#[tokio::test]
async fn post_is_not_routed() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn request_id_header_is_set() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
