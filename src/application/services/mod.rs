// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            comments::CommentCommandService, posts::PostCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            comments::CommentQueryService, posts::PostQueryService, users::UserQueryService,
        },
    },
    domain::{comment::CommentRepository, post::PostRepository, user::UserRepository},
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_repo),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_repo)));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&post_repo),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&post_repo),
        ));

        Self {
            user_commands,
            user_queries,
            post_commands,
            post_queries,
            comment_commands,
            comment_queries,
            token_manager,
        }
    }

    /// Resolves a raw bearer token into the acting user.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
