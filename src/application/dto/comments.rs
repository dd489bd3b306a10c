use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    pub post_id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            content: comment.content.into_inner(),
            author_id: comment.author_id.into(),
            post_id: comment.post_id.into(),
            parent_id: comment.parent_id.map(Into::into),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            deleted_at: comment.state.deleted_at(),
        }
    }
}
