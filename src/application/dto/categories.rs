use crate::domain::category::{Category, CategorySubscriber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CategorySubscriber> for SubscriptionDto {
    fn from(subscriber: CategorySubscriber) -> Self {
        Self {
            id: subscriber.id,
            user_id: subscriber.user_id.into(),
            category_id: subscriber.category_id.into(),
            created_at: subscriber.created_at,
        }
    }
}
