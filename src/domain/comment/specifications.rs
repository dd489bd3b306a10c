// src/domain/comment/specifications.rs
use std::fmt;

use crate::domain::comment::entity::Comment;
use crate::domain::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentOperation {
    Edit,
    Delete,
    Restore,
}

impl CommentOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentOperation::Edit => "edit",
            CommentOperation::Delete => "delete",
            CommentOperation::Restore => "restore",
        }
    }
}

impl fmt::Display for CommentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the author of a comment may edit, delete or restore it. There is no
/// administrative override. A cascade is authorized against the root comment
/// alone; the children it touches are not checked individually.
pub struct CanMutateCommentSpec<'a> {
    comment: &'a Comment,
    user_id: UserId,
    operation: CommentOperation,
}

impl<'a> CanMutateCommentSpec<'a> {
    pub fn new(comment: &'a Comment, user_id: UserId, operation: CommentOperation) -> Self {
        Self {
            comment,
            user_id,
            operation,
        }
    }

    pub fn operation(&self) -> CommentOperation {
        self.operation
    }

    pub fn is_satisfied(&self) -> bool {
        self.comment.is_authored_by(self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::{CommentContent, CommentId, CommentState};
    use crate::domain::post::PostId;
    use chrono::Utc;

    fn comment_by(author: i64, state: CommentState) -> Comment {
        let now = Utc::now();
        Comment {
            id: CommentId::new(1).unwrap(),
            content: CommentContent::new("hello").unwrap(),
            author_id: UserId::new(author).unwrap(),
            post_id: PostId::new(1).unwrap(),
            parent_id: None,
            created_at: now,
            updated_at: now,
            state,
        }
    }

    #[test]
    fn author_is_allowed_for_every_operation() {
        let comment = comment_by(1, CommentState::Live);
        for op in [
            CommentOperation::Edit,
            CommentOperation::Delete,
            CommentOperation::Restore,
        ] {
            assert!(CanMutateCommentSpec::new(&comment, UserId::new(1).unwrap(), op).is_satisfied());
        }
    }

    #[test]
    fn other_users_are_denied() {
        let comment = comment_by(1, CommentState::Live);
        let spec = CanMutateCommentSpec::new(&comment, UserId::new(2).unwrap(), CommentOperation::Edit);
        assert!(!spec.is_satisfied());
    }

    #[test]
    fn deletion_state_does_not_change_ownership() {
        let comment = comment_by(3, CommentState::Deleted { at: Utc::now() });
        let spec = CanMutateCommentSpec::new(
            &comment,
            UserId::new(3).unwrap(),
            CommentOperation::Restore,
        );
        assert!(spec.is_satisfied());
        assert_eq!(spec.operation().as_str(), "restore");
    }
}
