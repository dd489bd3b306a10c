use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;

    /// Live posts only; soft-deleted posts are reported as absent.
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;

    /// Newest first. Returns the requested page and the total number of live
    /// posts.
    async fn list_page(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Post>, u64)>;

    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;

    async fn soft_delete(&self, id: PostId, deleted_at: DateTime<Utc>) -> DomainResult<()>;
}
