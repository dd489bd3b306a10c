use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::post::{NewPost, PostContent, PostTitle},
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;

        let new_post = NewPost {
            title,
            content,
            author_id: actor.id,
            created_at: self.clock.now(),
        };

        let created = self.post_repo.insert(new_post).await?;
        tracing::info!(post_id = %created.id, actor_id = %actor.id, "post created");
        Ok(created.into())
    }
}
