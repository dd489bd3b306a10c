// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{
        CreateCommentCommand, DeleteCommentCommand, EditCommentCommand, RestoreCommentCommand,
    },
    dto::CommentDto,
    queries::comments::{GetCommentByIdQuery, ListPostCommentsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, QueryParams};
use crate::presentation::http::openapi::MessageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    /// Missing content is reported as a validation error.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EditCommentRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CascadeParams {
    /// Apply the transition to the direct replies as well. Accepts `true` or
    /// `false`; any other value is rejected with 400.
    #[serde(default, rename = "includeChildren", alias = "include_children")]
    pub include_children: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments",
    params(("post_id" = i64, Path, description = "Post identifier")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentDto),
        (status = 400, description = "Empty content or parent on another post.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post or parent comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(post_id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        post_id,
        content: payload.content,
        parent_id: payload.parent_id,
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments",
    params(("post_id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Live comments in creation order.", body = [CommentDto]),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Comments"
)]
pub async fn list_post_comments(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<i64>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_post_comments(ListPostCommentsQuery { post_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Live comment.", body = CommentDto),
        (status = 404, description = "Comment missing or deleted.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Comments"
)]
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_queries
        .get_comment_by_id(GetCommentByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment identifier")),
    request_body = EditCommentRequest,
    responses(
        (status = 200, description = "Comment updated.", body = CommentDto),
        (status = 400, description = "Empty content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn edit_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<EditCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    let command = EditCommentCommand {
        id,
        content: payload.content,
    };

    state
        .services
        .comment_commands
        .edit_comment(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment identifier"), CascadeParams),
    responses(
        (status = 204, description = "Comment deleted, or already deleted."),
        (status = 400, description = "Malformed includeChildren value.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    QueryParams(params): QueryParams<CascadeParams>,
) -> HttpResult<StatusCode> {
    let command = DeleteCommentCommand {
        id,
        include_children: params.include_children,
    };

    state
        .services
        .comment_commands
        .delete_comment(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/comments/{id}/restore",
    params(("id" = i64, Path, description = "Comment identifier"), CascadeParams),
    responses(
        (status = 200, description = "Comment restored, or already live.", body = MessageResponse),
        (status = 400, description = "Malformed includeChildren value.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn restore_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    QueryParams(params): QueryParams<CascadeParams>,
) -> HttpResult<Json<MessageResponse>> {
    let command = RestoreCommentCommand {
        id,
        include_children: params.include_children,
    };

    state
        .services
        .comment_commands
        .restore_comment(&user, command)
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "comment restored".into(),
    }))
}
