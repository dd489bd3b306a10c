use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{assert_error_body, build_test_services, router_for, seed_post, send};

#[tokio::test]
async fn comment_lifecycle_over_http() {
    let test = build_test_services();
    let post = seed_post(&test.services, 1).await;
    let app = router_for(&test);
    let comments_uri = format!("/api/v1/posts/{}/comments", post.id);

    let (status, parent) = send(
        &app,
        Method::POST,
        &comments_uri,
        Some(1),
        Some(json!({ "content": "hi" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(parent["author_id"], 1);
    assert!(parent["deleted_at"].is_null());
    let parent_id = parent["id"].as_i64().unwrap();

    let (status, child) = send(
        &app,
        Method::POST,
        &comments_uri,
        Some(2),
        Some(json!({ "content": "reply", "parent_id": parent_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(child["parent_id"], parent_id);
    let child_id = child["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/comments/{parent_id}?includeChildren=true"),
        Some(1),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/comments/{child_id}"),
        None,
        None,
    )
    .await;
    assert_error_body(status, &body, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/comments/{parent_id}/restore?include_children=true"),
        Some(1),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().is_some());

    let (status, listed) = send(&app, Method::GET, &comments_uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn include_children_defaults_to_false() {
    let test = build_test_services();
    let post = seed_post(&test.services, 1).await;
    let app = router_for(&test);
    let comments_uri = format!("/api/v1/posts/{}/comments", post.id);

    let (_, parent) = send(
        &app,
        Method::POST,
        &comments_uri,
        Some(1),
        Some(json!({ "content": "parent" })),
    )
    .await;
    let parent_id = parent["id"].as_i64().unwrap();
    let (_, child) = send(
        &app,
        Method::POST,
        &comments_uri,
        Some(1),
        Some(json!({ "content": "child", "parent_id": parent_id })),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/comments/{parent_id}"),
        Some(1),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/v1/comments/{}", child["id"]),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_include_children_is_400_and_changes_nothing() {
    let test = build_test_services();
    let post = seed_post(&test.services, 1).await;
    let app = router_for(&test);

    let (_, created) = send(
        &app,
        Method::POST,
        &format!("/api/v1/posts/{}/comments", post.id),
        Some(1),
        Some(json!({ "content": "kept" })),
    )
    .await;
    let uri = format!("/api/v1/comments/{}", created["id"]);

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("{uri}?includeChildren=yes"),
        Some(1),
        None,
    )
    .await;
    assert_error_body(status, &body, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("{uri}/restore?includeChildren=1"),
        Some(1),
        None,
    )
    .await;
    assert_error_body(status, &body, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_author_gets_403_and_missing_gets_404() {
    let test = build_test_services();
    let post = seed_post(&test.services, 1).await;
    let app = router_for(&test);

    let (_, created) = send(
        &app,
        Method::POST,
        &format!("/api/v1/posts/{}/comments", post.id),
        Some(1),
        Some(json!({ "content": "owned" })),
    )
    .await;
    let uri = format!("/api/v1/comments/{}", created["id"]);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(2),
        Some(json!({ "content": "hijack" })),
    )
    .await;
    assert_error_body(status, &body, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::DELETE, &uri, Some(2), None).await;
    assert_error_body(status, &body, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/api/v1/comments/9999?includeChildren=true",
        Some(2),
        None,
    )
    .await;
    assert_error_body(status, &body, StatusCode::NOT_FOUND);

    let (status, edited) = send(
        &app,
        Method::PUT,
        &uri,
        Some(1),
        Some(json!({ "content": "edited" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["content"], "edited");
}

#[tokio::test]
async fn blank_or_missing_content_is_400() {
    let test = build_test_services();
    let post = seed_post(&test.services, 1).await;
    let app = router_for(&test);
    let uri = format!("/api/v1/posts/{}/comments", post.id);

    let (status, body) = send(
        &app,
        Method::POST,
        &uri,
        Some(1),
        Some(json!({ "content": "  " })),
    )
    .await;
    assert_error_body(status, &body, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::POST, &uri, Some(1), Some(json!({}))).await;
    assert_error_body(status, &body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mutations_require_a_token() {
    let test = build_test_services();
    let post = seed_post(&test.services, 1).await;
    let app = router_for(&test);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/posts/{}/comments", post.id),
        None,
        Some(json!({ "content": "anonymous" })),
    )
    .await;
    assert_error_body(status, &body, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn commenting_on_missing_post_is_404() {
    let app = support::make_test_router();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/posts/77/comments",
        Some(1),
        Some(json!({ "content": "hello?" })),
    )
    .await;
    assert_error_body(status, &body, StatusCode::NOT_FOUND);
}
