// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::post::{CanModifyPostSpec, Post, PostId, PostRepository},
};

pub struct PostCommandService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(post_repo: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { post_repo, clock }
    }

    /// Loads a live post and checks the actor wrote it.
    pub(super) async fn load_owned(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        action: &str,
    ) -> ApplicationResult<Post> {
        let id = PostId::new(id).map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanModifyPostSpec::new(&post, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(format!(
                "only the author may {action} this post"
            )));
        }

        Ok(post)
    }
}
