use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct GetCommentByIdQuery {
    pub id: i64,
}

impl CommentQueryService {
    /// Soft-deleted comments are reported exactly like missing ones.
    pub async fn get_comment_by_id(
        &self,
        query: GetCommentByIdQuery,
    ) -> ApplicationResult<CommentDto> {
        let id = CommentId::new(query.id)
            .map_err(|_| ApplicationError::not_found("comment not found"))?;
        let comment = self
            .comment_repo
            .find_live(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        Ok(comment.into())
    }
}
