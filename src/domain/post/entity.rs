// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostContent, PostId, PostTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub content: Option<PostContent>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
