// src/infrastructure/cache/redis_cache.rs
use crate::application::error::ApplicationError;
use crate::application::{
    ApplicationResult,
    ports::cache::{PostCache, post_cache_key},
};
use crate::domain::author::AuthorId;
use crate::domain::post::{Post, PostHeader, PostId, PostText};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

/// Shared post cache backed by Redis. Keys carry no TTL.
#[derive(Clone)]
pub struct RedisPostCache {
    pool: Pool,
}

/// Wire form of a cached post.
#[derive(Debug, Serialize, Deserialize)]
struct CachedPost {
    id: i64,
    author_id: i64,
    header: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl From<&Post> for CachedPost {
    fn from(post: &Post) -> Self {
        Self {
            id: i64::from(post.id),
            author_id: i64::from(post.author_id),
            header: post.header.as_str().to_owned(),
            text: post.text.as_str().to_owned(),
            created_at: post.created_at,
        }
    }
}

impl TryFrom<CachedPost> for Post {
    type Error = ApplicationError;

    fn try_from(cached: CachedPost) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(cached.id)?,
            author_id: AuthorId::new(cached.author_id)?,
            header: PostHeader::new(cached.header)?,
            text: PostText::new(cached.text)?,
            created_at: cached.created_at,
        })
    }
}

impl RedisPostCache {
    /// Create a cache from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str) -> ApplicationResult<Self> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

#[async_trait]
impl PostCache for RedisPostCache {
    async fn get(&self, id: PostId) -> ApplicationResult<Option<Post>> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn
            .get(post_cache_key(id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let Some(raw) = raw else {
            return Ok(None);
        };
        let cached: CachedPost = serde_json::from_str(&raw)
            .map_err(|err| ApplicationError::infrastructure(format!("corrupt cache entry: {err}")))?;
        Post::try_from(cached).map(Some)
    }

    async fn set(&self, post: &Post) -> ApplicationResult<()> {
        let payload = serde_json::to_string(&CachedPost::from(post))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(post_cache_key(post.id), payload)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    async fn invalidate(&self, id: PostId) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(post_cache_key(id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_form_restores_the_post() {
        let post = Post {
            id: PostId::new(4).unwrap(),
            author_id: AuthorId::new(2).unwrap(),
            header: PostHeader::new("Elections").unwrap(),
            text: PostText::new("Turnout was high").unwrap(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&CachedPost::from(&post)).unwrap();
        let restored: CachedPost = serde_json::from_str(&json).unwrap();
        assert_eq!(Post::try_from(restored).unwrap(), post);
    }

    #[test]
    fn rejects_malformed_redis_url() {
        assert!(RedisPostCache::from_url("not a url").is_err());
    }
}
