// src/domain/comment/repository.rs
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::{CommentContent, CommentId};
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Returns the comment only while it carries no deletion marker.
    async fn find_live(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    /// Returns the comment whatever its deletion state.
    async fn find_any(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    async fn update_content(
        &self,
        id: CommentId,
        content: CommentContent,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Comment>;

    /// Sets the deletion marker on `id` and, when `cascade` is set, on every
    /// row whose parent is `id`, as one atomic unit. Rows that are already
    /// deleted keep their original timestamp. Returns the number of rows
    /// whose state changed.
    async fn soft_delete(
        &self,
        id: CommentId,
        cascade: bool,
        deleted_at: DateTime<Utc>,
    ) -> DomainResult<u64>;

    /// Clears the deletion marker on `id` and, when `cascade` is set, on its
    /// direct children, as one atomic unit. Returns the number of rows whose
    /// state changed.
    async fn restore(&self, id: CommentId, cascade: bool) -> DomainResult<u64>;

    async fn list_live_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>>;
}
