// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentContent, CommentId, CommentState};
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentContent,
    pub author_id: UserId,
    pub post_id: PostId,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub state: CommentState,
}

impl Comment {
    pub fn is_live(&self) -> bool {
        self.state.is_live()
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    pub fn is_child_of(&self, parent: CommentId) -> bool {
        self.parent_id == Some(parent)
    }

    pub fn set_content(&mut self, content: CommentContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }

    pub fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.state = self.state.mark_deleted(at);
    }

    pub fn restore(&mut self) {
        self.state = CommentState::Live;
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: CommentContent,
    pub author_id: UserId,
    pub post_id: PostId,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}
