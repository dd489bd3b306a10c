use crate::domain::post::entity::Post;
use crate::domain::user::UserId;

pub struct CanModifyPostSpec<'a> {
    post: &'a Post,
    user_id: UserId,
}

impl<'a> CanModifyPostSpec<'a> {
    pub fn new(post: &'a Post, user_id: UserId) -> Self {
        Self { post, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.post.author_id == self.user_id
    }
}
