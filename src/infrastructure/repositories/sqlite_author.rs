// src/infrastructure/repositories/sqlite_author.rs
use super::map_sqlx;
use crate::domain::author::{Author, AuthorId, AuthorRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteAuthorRepository {
    pool: SqlitePool,
}

impl SqliteAuthorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    user_id: i64,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
        })
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>("SELECT id, user_id FROM authors WHERE user_id = ?")
            .bind(i64::from(user_id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::memory_pool;

    #[tokio::test]
    async fn finds_author_linked_to_user() {
        let pool = memory_pool().await;
        sqlx::query("INSERT INTO authors (id, user_id) VALUES (3, 42)")
            .execute(&pool)
            .await
            .unwrap();
        let repo = SqliteAuthorRepository::new(pool);

        let author = repo.find_by_user(UserId::new(42).unwrap()).await.unwrap();
        assert_eq!(author.map(|a| a.id), Some(AuthorId::new(3).unwrap()));
        assert!(repo.find_by_user(UserId::new(7).unwrap()).await.unwrap().is_none());
    }
}
