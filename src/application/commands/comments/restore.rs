// src/application/commands/comments/restore.rs
use super::{CommentCommandService, guard::authorize};
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::comment::CommentOperation,
};

pub struct RestoreCommentCommand {
    pub id: i64,
    pub include_children: bool,
}

impl CommentCommandService {
    /// Clears the deletion marker of a comment, optionally together with its
    /// direct replies. A comment that is already live is left untouched and
    /// the call succeeds before any ownership check.
    pub async fn restore_comment(
        &self,
        actor: &AuthenticatedUser,
        command: RestoreCommentCommand,
    ) -> ApplicationResult<()> {
        let comment = self.load_any(command.id).await?;

        if comment.is_live() {
            tracing::debug!(comment_id = %comment.id, "restore skipped, comment is live");
            return Ok(());
        }

        authorize(actor, &comment, CommentOperation::Restore)?;

        let affected = self
            .comment_repo
            .restore(comment.id, command.include_children)
            .await?;
        tracing::info!(
            comment_id = %comment.id,
            actor_id = %actor.id,
            cascade = command.include_children,
            affected,
            "comment restored"
        );
        Ok(())
    }
}
