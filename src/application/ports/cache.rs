// src/application/ports/cache.rs
use crate::application::ApplicationResult;
use crate::domain::post::{Post, PostId};
use async_trait::async_trait;

/// Key under which a post is cached.
pub fn post_cache_key(id: PostId) -> String {
    format!("post-{id}")
}

/// Read-through cache for single posts. Entries never expire on their own; writers must
/// call [`PostCache::invalidate`] after changing or removing a post.
#[async_trait]
pub trait PostCache: Send + Sync {
    async fn get(&self, id: PostId) -> ApplicationResult<Option<Post>>;
    async fn set(&self, post: &Post) -> ApplicationResult<()>;
    async fn invalidate(&self, id: PostId) -> ApplicationResult<()>;
}
