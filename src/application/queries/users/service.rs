use std::sync::Arc;

use crate::domain::user::UserRepository;

/// Read side for user accounts: profile lookup for the authenticated actor.
pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}
