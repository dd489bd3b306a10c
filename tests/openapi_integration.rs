use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use blog_core::presentation::http::openapi::{OPENAPI_JSON_PATH, docs_router};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

#[tokio::test]
async fn openapi_document_is_served() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri(OPENAPI_JSON_PATH)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    let paths = doc["paths"].as_object().expect("paths object");
    assert!(paths.contains_key("/api/v1/comments/{id}/restore"));
    assert!(paths.contains_key("/api/v1/posts/{post_id}/comments"));
    assert!(doc["components"]["securitySchemes"]["bearerAuth"].is_object());
}

#[tokio::test]
async fn root_redirects_to_swagger() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
}
