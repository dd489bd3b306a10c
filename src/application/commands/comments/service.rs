// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::{Comment, CommentId, CommentRepository},
        post::PostRepository,
    },
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        post_repo: Arc<dyn PostRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
            clock,
        }
    }

    /// Loads a comment whatever its deletion state. Ids that can never exist
    /// are reported as missing rather than malformed so that existence is
    /// always the first failure a caller observes.
    pub(super) async fn load_any(&self, id: i64) -> ApplicationResult<Comment> {
        let id = CommentId::new(id).map_err(|_| comment_not_found())?;
        self.comment_repo
            .find_any(id)
            .await?
            .ok_or_else(comment_not_found)
    }
}

pub(super) fn comment_not_found() -> ApplicationError {
    ApplicationError::not_found("comment not found")
}
