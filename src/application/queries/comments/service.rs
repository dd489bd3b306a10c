use std::sync::Arc;

use crate::domain::{comment::CommentRepository, post::PostRepository};

pub struct CommentQueryService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) post_repo: Arc<dyn PostRepository>,
}

impl CommentQueryService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        post_repo: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
        }
    }
}
