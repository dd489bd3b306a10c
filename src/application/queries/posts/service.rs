use std::sync::Arc;

use crate::domain::post::PostRepository;

pub struct PostQueryService {
    pub(super) post_repo: Arc<dyn PostRepository>,
}

impl PostQueryService {
    pub fn new(post_repo: Arc<dyn PostRepository>) -> Self {
        Self { post_repo }
    }
}
