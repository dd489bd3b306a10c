// src/application/commands/comments/edit.rs
use super::{CommentCommandService, guard::authorize};
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::ApplicationResult,
    },
    domain::comment::{CommentContent, CommentOperation},
};

pub struct EditCommentCommand {
    pub id: i64,
    pub content: String,
}

impl CommentCommandService {
    /// Replaces the content of a comment. Soft-deleted comments can be
    /// edited by their author before being restored.
    pub async fn edit_comment(
        &self,
        actor: &AuthenticatedUser,
        command: EditCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let content = CommentContent::new(command.content)?;
        let comment = self.load_any(command.id).await?;

        authorize(actor, &comment, CommentOperation::Edit)?;

        let updated = self
            .comment_repo
            .update_content(comment.id, content, self.clock.now())
            .await?;
        tracing::info!(comment_id = %updated.id, actor_id = %actor.id, "comment edited");
        Ok(updated.into())
    }
}
