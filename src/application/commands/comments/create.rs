// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentContent, CommentId, NewComment},
        post::PostId,
    },
};

pub struct CreateCommentCommand {
    pub post_id: i64,
    pub content: String,
    pub parent_id: Option<i64>,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let content = CommentContent::new(command.content)?;

        let post_id = PostId::new(command.post_id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let parent_id = match command.parent_id {
            Some(raw) => Some(self.resolve_parent(raw, post_id).await?),
            None => None,
        };

        let new_comment = NewComment {
            content,
            author_id: actor.id,
            post_id,
            parent_id,
            created_at: self.clock.now(),
        };

        let created = self.comment_repo.insert(new_comment).await?;
        tracing::info!(
            comment_id = %created.id,
            post_id = %post_id,
            actor_id = %actor.id,
            threaded = parent_id.is_some(),
            "comment created"
        );
        Ok(created.into())
    }

    /// A reply needs a live parent on the same post; a deleted parent reads as missing.
    async fn resolve_parent(&self, raw: i64, post_id: PostId) -> ApplicationResult<CommentId> {
        let parent_id = CommentId::new(raw)
            .map_err(|_| ApplicationError::not_found("parent comment not found"))?;
        let parent = self
            .comment_repo
            .find_live(parent_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("parent comment not found"))?;

        if parent.post_id != post_id {
            return Err(ApplicationError::validation(
                "parent comment belongs to a different post",
            ));
        }

        Ok(parent.id)
    }
}
