// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use scribe_core::application::{
    commands::posts::DEFAULT_SLUG_WRITE_RETRIES,
    ports::{security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use scribe_core::domain::post::{PostReadRepository, PostWriteRepository};
use scribe_core::infrastructure::repositories::InMemoryPostRepository;
use scribe_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;

pub fn build_services(
    write: Arc<dyn PostWriteRepository>,
    read: Arc<dyn PostReadRepository>,
) -> Arc<ApplicationServices> {
    let token_manager: Arc<dyn TokenManager> = Arc::new(mocks::DummyTokenManager);
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    Arc::new(ApplicationServices::new(
        write,
        read,
        token_manager,
        clock,
        DEFAULT_SLUG_WRITE_RETRIES,
    ))
}

/// Services over a fresh in-memory store.
pub fn memory_services() -> Arc<ApplicationServices> {
    let store = Arc::new(InMemoryPostRepository::new());
    build_services(store.clone(), store)
}

pub fn build_test_state() -> HttpState {
    HttpState {
        services: memory_services(),
    }
}

pub fn make_router(state: HttpState) -> axum::Router {
    let options = RouterOptions {
        allowed_origins: vec!["http://localhost:3000".into()],
        rate_limit: false,
    };
    build_router(state, &options)
}

pub fn make_test_router() -> axum::Router {
    make_router(build_test_state())
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("valid request")
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
