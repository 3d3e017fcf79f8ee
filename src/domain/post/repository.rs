// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::filter::PostFilter;
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Persists the post and one association per category atomically.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;

    /// Posts matching `filter`, newest first, together with the total number of matches.
    async fn list_page(&self, filter: &PostFilter, page: PageRequest)
    -> DomainResult<(Vec<Post>, u64)>;
}
