// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use blog_core::application::{
    dto::PostDto,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use blog_core::application::commands::posts::CreatePostCommand;
use blog_core::domain::{comment::CommentRepository, post::PostRepository, user::UserRepository};
use blog_core::infrastructure::repositories::InMemoryCommentRepository;
use blog_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

/// Services wired to in-memory stores, plus a handle on the comment store so
/// tests can inspect rows regardless of their deletion state.
pub struct TestServices {
    pub services: Arc<ApplicationServices>,
    pub comments: Arc<InMemoryCommentRepository>,
}

pub fn build_test_services() -> TestServices {
    let user_repo: Arc<dyn UserRepository> = Arc::new(mocks::InMemoryUserRepo::default());
    let post_repo: Arc<dyn PostRepository> = Arc::new(mocks::InMemoryPostRepo::default());
    let comments = Arc::new(InMemoryCommentRepository::new());
    let comment_repo: Arc<dyn CommentRepository> = comments.clone();
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(mocks::DummyPasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(mocks::DummyTokenManager);
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        post_repo,
        comment_repo,
        password_hasher,
        token_manager,
        clock,
    ));

    TestServices { services, comments }
}

pub async fn seed_post(services: &ApplicationServices, author: i64) -> PostDto {
    services
        .post_commands
        .create_post(
            &mocks::actor(author),
            CreatePostCommand {
                title: "A post".into(),
                content: "Post body".into(),
            },
        )
        .await
        .expect("seed post")
}

pub fn make_test_router() -> axum::Router {
    router_for(&build_test_services())
}

pub fn router_for(test: &TestServices) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&test.services),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

/// Sends one request through a clone of `app` and returns status and JSON
/// body (`Value::Null` when the body is empty).
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    auth: Option<i64>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = auth {
        builder = builder.header(header::AUTHORIZATION, mocks::bearer(user));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Asserts an `{error, message}` body with the canonical reason for `expected`.
pub fn assert_error_body(status: StatusCode, body: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        expected.canonical_reason()
    );
    let message = body.get("message").and_then(Value::as_str).unwrap_or("");
    assert!(!message.is_empty(), "expected non-empty message field");
}
