use super::PostCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let post = self.load_owned(actor, command.id, "delete").await?;
        self.post_repo.soft_delete(post.id, self.clock.now()).await?;
        tracing::info!(post_id = %post.id, actor_id = %actor.id, "post soft-deleted");
        Ok(())
    }
}
