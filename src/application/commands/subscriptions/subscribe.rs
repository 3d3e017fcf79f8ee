// src/application/commands/subscriptions/subscribe.rs
use super::SubscriptionCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, SubscriptionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, NewSubscription},
};

pub struct SubscribeCommand {
    pub category_id: i64,
}

impl SubscriptionCommandService {
    /// Record a subscription of `actor` to a category. Repeating the call records another
    /// subscription row.
    pub async fn subscribe(
        &self,
        actor: &AuthenticatedUser,
        command: SubscribeCommand,
    ) -> ApplicationResult<SubscriptionDto> {
        let missing = || ApplicationError::not_found("category not found");
        let category_id = CategoryId::new(command.category_id).map_err(|_| missing())?;
        let category = self
            .category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(missing)?;

        let subscriber = self
            .subscription_repo
            .insert(NewSubscription {
                user_id: actor.id,
                category_id: category.id,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(
            user_id = %actor.id,
            category_id = %category.id,
            subscription_id = subscriber.id,
            "category subscription recorded"
        );
        Ok(subscriber.into())
    }
}
