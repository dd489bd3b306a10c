use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct GetPostByIdQuery {
    pub id: i64,
}

impl PostQueryService {
    pub async fn get_post_by_id(&self, query: GetPostByIdQuery) -> ApplicationResult<PostDto> {
        let id = PostId::new(query.id).map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(post.into())
    }
}
