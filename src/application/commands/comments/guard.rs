// src/application/commands/comments/guard.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::{CanMutateCommentSpec, Comment, CommentOperation},
};

pub(super) fn authorize(
    actor: &AuthenticatedUser,
    comment: &Comment,
    operation: CommentOperation,
) -> ApplicationResult<()> {
    let spec = CanMutateCommentSpec::new(comment, actor.id, operation);
    if spec.is_satisfied() {
        Ok(())
    } else {
        tracing::debug!(
            comment_id = %comment.id,
            actor_id = %actor.id,
            operation = %operation,
            "comment mutation denied"
        );
        Err(ApplicationError::forbidden(format!(
            "only the author may {operation} this comment"
        )))
    }
}
