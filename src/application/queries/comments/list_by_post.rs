use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct ListPostCommentsQuery {
    pub post_id: i64,
}

impl CommentQueryService {
    pub async fn list_post_comments(
        &self,
        query: ListPostCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let post_id = PostId::new(query.post_id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let comments = self.comment_repo.list_live_by_post(post_id).await?;
        Ok(comments.into_iter().map(CommentDto::from).collect())
    }
}
