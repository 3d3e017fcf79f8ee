// src/application/commands/subscriptions/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::category::{CategoryRepository, SubscriptionRepository},
};

pub struct SubscriptionCommandService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SubscriptionCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            category_repo,
            subscription_repo,
            clock,
        }
    }
}
