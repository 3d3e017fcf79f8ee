// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{
        cache::PostCache,
        notification::{NotificationQueue, NotificationRenderer},
        time::Clock,
    },
    domain::{
        author::AuthorRepository,
        category::CategoryRepository,
        post::{PostId, PostReadRepository, PostWriteRepository},
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) cache: Arc<dyn PostCache>,
    pub(super) notifications: Arc<dyn NotificationQueue>,
    pub(super) renderer: Arc<dyn NotificationRenderer>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        cache: Arc<dyn PostCache>,
        notifications: Arc<dyn NotificationQueue>,
        renderer: Arc<dyn NotificationRenderer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            author_repo,
            category_repo,
            cache,
            notifications,
            renderer,
            clock,
        }
    }

    /// Drop the cached copy of a post after it changed. A failing cache is only logged; the
    /// write itself already succeeded.
    pub(super) async fn evict(&self, id: PostId) {
        if let Err(err) = self.cache.invalidate(id).await {
            tracing::warn!(post_id = %id, error = %err, "failed to invalidate cached post");
        }
    }
}
