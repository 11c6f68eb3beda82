use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use scribe_core::presentation::http::openapi::docs_router;
use tower::ServiceExt; // for oneshot

mod support;

#[tokio::test]
async fn openapi_json_describes_post_routes() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let doc = support::read_json(resp).await;
    assert!(doc["paths"]["/api/v1/posts"]["post"].is_object());
    assert!(doc["paths"]["/api/v1/posts/by-slug/{slug}"]["get"].is_object());
    assert!(doc["components"]["schemas"]["PostDto"].is_object());
}

#[tokio::test]
async fn root_redirects_to_swagger_ui() {
    let app = support::make_test_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers()["location"], "/docs");
}
