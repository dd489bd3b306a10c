// src/application/commands/comments/delete.rs
use super::{CommentCommandService, guard::authorize};
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::comment::CommentOperation,
};

pub struct DeleteCommentCommand {
    pub id: i64,
    pub include_children: bool,
}

impl CommentCommandService {
    /// Soft-deletes a comment, optionally together with its direct replies.
    /// Deleting an already deleted comment succeeds without changes. The
    /// cascade is authorized against the target only.
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let comment = self.load_any(command.id).await?;

        authorize(actor, &comment, CommentOperation::Delete)?;

        let affected = self
            .comment_repo
            .soft_delete(comment.id, command.include_children, self.clock.now())
            .await?;
        if affected == 0 {
            tracing::debug!(comment_id = %comment.id, "delete skipped, nothing left to mark");
            return Ok(());
        }

        tracing::info!(
            comment_id = %comment.id,
            actor_id = %actor.id,
            cascade = command.include_children,
            affected,
            "comment soft-deleted"
        );
        Ok(())
    }
}
