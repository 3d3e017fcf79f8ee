use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Post, PostId},
};

pub struct GetPostByIdQuery {
    pub id: i64,
}

impl PostQueryService {
    /// Read-through lookup: a cached post is returned as is, otherwise the store is read once
    /// and the result cached without expiry.
    pub async fn get_post_by_id(&self, query: GetPostByIdQuery) -> ApplicationResult<PostDto> {
        let id = PostId::new(query.id).map_err(|_| ApplicationError::not_found("post not found"))?;

        if let Some(post) = self.cached(id).await {
            tracing::debug!(post_id = %id, "post cache hit");
            return Ok(PostDto::censored(post, &self.censor));
        }

        tracing::debug!(post_id = %id, "post cache miss");
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if let Err(err) = self.cache.set(&post).await {
            tracing::warn!(post_id = %id, error = %err, "failed to cache post");
        }

        Ok(PostDto::censored(post, &self.censor))
    }

    async fn cached(&self, id: PostId) -> Option<Post> {
        match self.cache.get(id).await {
            Ok(hit) => hit,
            Err(err) => {
                tracing::warn!(post_id = %id, error = %err, "post cache unavailable, reading store");
                None
            }
        }
    }
}
