// src/infrastructure/repositories/sqlite_subscription.rs
use super::map_sqlx;
use crate::domain::category::{
    CategoryId, CategorySubscriber, NewSubscription, SubscriptionRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteSubscriptionRepository {
    pool: SqlitePool,
}

impl SqliteSubscriptionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriberRow {
    id: i64,
    user_id: i64,
    category_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<SubscriberRow> for CategorySubscriber {
    type Error = DomainError;

    fn try_from(row: SubscriberRow) -> Result<Self, Self::Error> {
        Ok(CategorySubscriber {
            id: row.id,
            user_id: UserId::new(row.user_id)?,
            category_id: CategoryId::new(row.category_id)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl SubscriptionRepository for SqliteSubscriptionRepository {
    async fn insert(&self, subscription: NewSubscription) -> DomainResult<CategorySubscriber> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            "INSERT INTO category_subscribers (user_id, category_id, created_at)
             VALUES (?, ?, ?)
             RETURNING id, user_id, category_id, created_at",
        )
        .bind(i64::from(subscription.user_id))
        .bind(i64::from(subscription.category_id))
        .bind(subscription.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        CategorySubscriber::try_from(row)
    }
}
