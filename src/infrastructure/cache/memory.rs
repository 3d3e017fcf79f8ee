// src/infrastructure/cache/memory.rs
use crate::application::{ApplicationResult, ports::cache::PostCache};
use crate::domain::post::{Post, PostId};
use async_trait::async_trait;
use moka::future::Cache;

/// Default number of posts kept in process.
pub const DEFAULT_MAX_CAPACITY: u64 = 10_000;

/// In-process post cache. Entries are only evicted by capacity pressure or invalidation.
#[derive(Clone)]
pub struct MokaPostCache {
    cache: Cache<i64, Post>,
}

impl MokaPostCache {
    pub fn new(max_capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_capacity).build(),
        }
    }
}

impl Default for MokaPostCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CAPACITY)
    }
}

impl std::fmt::Debug for MokaPostCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaPostCache")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}

#[async_trait]
impl PostCache for MokaPostCache {
    async fn get(&self, id: PostId) -> ApplicationResult<Option<Post>> {
        Ok(self.cache.get(&i64::from(id)).await)
    }

    async fn set(&self, post: &Post) -> ApplicationResult<()> {
        self.cache.insert(i64::from(post.id), post.clone()).await;
        Ok(())
    }

    async fn invalidate(&self, id: PostId) -> ApplicationResult<()> {
        self.cache.invalidate(&i64::from(id)).await;
        Ok(())
    }
}
