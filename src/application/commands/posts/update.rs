// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostHeader, PostId, PostText, PostUpdate},
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub header: Option<String>,
    pub text: Option<String>,
    /// Replacement category set; `None` leaves the associations untouched.
    pub categories: Option<Vec<i64>>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        ensure_capability(actor, "posts", "change")?;

        let id = PostId::new(command.id).map_err(|_| ApplicationError::not_found("post not found"))?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let UpdatePostCommand {
            id: _,
            header,
            text,
            categories,
        } = command;

        let mut update = PostUpdate::new(id);
        if let Some(header) = header {
            update = update.with_header(PostHeader::new(header)?);
        }
        if let Some(text) = text {
            update = update.with_text(PostText::new(text)?);
        }
        if let Some(categories) = categories {
            update = update.with_categories(self.resolve_categories(&categories).await?);
        }

        if update.is_empty() {
            return Ok(existing.into());
        }

        let updated = self.write_repo.update(update).await?;
        self.evict(id).await;
        tracing::info!(post_id = %id, user_id = %actor.id, "post updated");
        Ok(updated.into())
    }
}
