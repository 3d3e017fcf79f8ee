// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "posts", "delete")?;

        let id = PostId::new(command.id).map_err(|_| ApplicationError::not_found("post not found"))?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        self.write_repo.delete(id).await?;
        self.evict(id).await;
        tracing::info!(post_id = %id, user_id = %actor.id, "post deleted");
        Ok(())
    }
}
