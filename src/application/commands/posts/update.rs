use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::post::{PostContent, PostTitle, PostUpdate},
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Blank values mean "leave unchanged".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let post = self.load_owned(actor, command.id, "update").await?;

        let title = non_blank(command.title).map(PostTitle::new).transpose()?;
        let content = non_blank(command.content).map(PostContent::new).transpose()?;

        let mut update = PostUpdate::new(post.id, self.clock.now());
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }

        if update.is_empty() {
            return Ok(post.into());
        }

        let updated = self.post_repo.update(update).await?;
        Ok(updated.into())
    }
}
