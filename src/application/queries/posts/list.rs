use super::PostQueryService;
use crate::application::{
    dto::{PaginatedResult, PostDto},
    error::ApplicationResult,
};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListPostsQuery {
    fn normalized(&self) -> (u32, u32) {
        let page = self.page.unwrap_or(1).max(1);
        let page_size = self
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        (page, page_size)
    }
}

impl PostQueryService {
    pub async fn list_posts(
        &self,
        query: ListPostsQuery,
    ) -> ApplicationResult<PaginatedResult<PostDto>> {
        let (page, page_size) = query.normalized();
        let (posts, total) = self.post_repo.list_page(page, page_size).await?;
        let items = posts.into_iter().map(PostDto::from).collect();
        Ok(PaginatedResult::new(items, total, page, page_size))
    }
}
