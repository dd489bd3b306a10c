// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::PostDto,
    queries::posts::{GetPostByIdQuery, ListPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, QueryParams};
use crate::presentation::http::openapi::PostPageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostListParams {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Items per page, clamped to 1..=100.
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "Page of live posts, newest first.", body = PostPageResponse)
    ),
    security(()),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<PostListParams>,
) -> HttpResult<Json<PostPageResponse>> {
    let page = state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            page: params.page,
            page_size: params.page_size,
        })
        .await
        .into_http()?;

    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post found.", body = PostDto),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Invalid title or content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
    };

    let post = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 400, description = "Invalid title or content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 204, description = "Post deleted."),
        (status = 403, description = "Caller is not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
