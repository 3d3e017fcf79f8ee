// src/domain/author/repository.rs
use crate::domain::author::entity::Author;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Author>>;
}
