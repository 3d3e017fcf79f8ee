// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{posts::PostCommandService, subscriptions::SubscriptionCommandService},
        ports::{
            ClockPort, NotificationQueuePort, NotificationRendererPort, PostCachePort,
            TokenManagerPort,
        },
        queries::{categories::CategoryQueryService, posts::PostQueryService},
    },
    domain::{
        author::AuthorRepository,
        category::{CategoryRepository, SubscriptionRepository},
        censor::ProfanityFilter,
        post::{PostReadRepository, PostWriteRepository},
    },
};

/// Repositories and adapters the application services are assembled from.
pub struct ServiceDependencies {
    pub post_write_repo: Arc<dyn PostWriteRepository>,
    pub post_read_repo: Arc<dyn PostReadRepository>,
    pub author_repo: Arc<dyn AuthorRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub subscription_repo: Arc<dyn SubscriptionRepository>,
    pub post_cache: Arc<PostCachePort>,
    pub notifications: Arc<NotificationQueuePort>,
    pub renderer: Arc<NotificationRendererPort>,
    pub token_manager: Arc<TokenManagerPort>,
    pub censor: Arc<ProfanityFilter>,
    pub clock: Arc<ClockPort>,
}

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub subscription_commands: Arc<SubscriptionCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    token_manager: Arc<TokenManagerPort>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            post_write_repo,
            post_read_repo,
            author_repo,
            category_repo,
            subscription_repo,
            post_cache,
            notifications,
            renderer,
            token_manager,
            censor,
            clock,
        } = deps;

        let post_commands = Arc::new(PostCommandService::new(
            post_write_repo,
            Arc::clone(&post_read_repo),
            author_repo,
            Arc::clone(&category_repo),
            Arc::clone(&post_cache),
            notifications,
            renderer,
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(post_read_repo, post_cache, censor));

        let subscription_commands = Arc::new(SubscriptionCommandService::new(
            Arc::clone(&category_repo),
            subscription_repo,
            clock,
        ));

        let category_queries = Arc::new(CategoryQueryService::new(category_repo));

        Self {
            post_commands,
            post_queries,
            subscription_commands,
            category_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<TokenManagerPort> {
        Arc::clone(&self.token_manager)
    }
}
