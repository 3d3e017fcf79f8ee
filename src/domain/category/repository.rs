// src/domain/category/repository.rs
use crate::domain::category::entity::{Category, CategoryId, CategorySubscriber, NewSubscription};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;

    /// Categories ordered by name, together with the total number of categories.
    async fn list_page(&self, page: PageRequest) -> DomainResult<(Vec<Category>, u64)>;
}

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn insert(&self, subscription: NewSubscription) -> DomainResult<CategorySubscriber>;
}
