// src/infrastructure/repositories/sqlite_post.rs
use super::map_sqlx;
use crate::domain::author::AuthorId;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::post::{
    NewPost, Post, PostFilter, PostHeader, PostId, PostReadRepository, PostText, PostUpdate,
    PostWriteRepository, fold_header,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

const POST_COLUMNS: &str = "id, author_id, header, text, created_at";

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: SqlitePool,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: SqlitePool,
}

impl SqlitePostReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    author_id: i64,
    header: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            author_id: AuthorId::new(row.author_id)?,
            header: PostHeader::new(row.header)?,
            text: PostText::new(row.text)?,
            created_at: row.created_at,
        })
    }
}

async fn link_categories(
    conn: &mut SqliteConnection,
    post_id: PostId,
    categories: &[CategoryId],
) -> DomainResult<()> {
    for category in categories {
        sqlx::query("INSERT INTO post_categories (post_id, category_id) VALUES (?, ?)")
            .bind(i64::from(post_id))
            .bind(i64::from(*category))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            author_id,
            header,
            text,
            categories,
            created_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (author_id, header, header_folded, text, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(i64::from(author_id))
        .bind(fold_header(header.as_str()))
        .bind(header.into_inner())
        .bind(text.into_inner())
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let created = Post::try_from(row)?;
        link_categories(&mut tx, created.id, &categories).await?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            header,
            text,
            categories,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        if header.is_some() || text.is_some() {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE posts SET ");
            let mut assignments = builder.separated(", ");
            if let Some(header) = header {
                assignments.push("header_folded = ");
                assignments.push_bind_unseparated(fold_header(header.as_str()));
                assignments.push("header = ");
                assignments.push_bind_unseparated(header.into_inner());
            }
            if let Some(text) = text {
                assignments.push("text = ");
                assignments.push_bind_unseparated(text.into_inner());
            }
            builder.push(" WHERE id = ");
            builder.push_bind(i64::from(id));

            let result = builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            if result.rows_affected() == 0 {
                return Err(DomainError::NotFound("post not found".into()));
            }
        }

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(categories) = categories {
            sqlx::query("DELETE FROM post_categories WHERE post_id = ?")
                .bind(i64::from(id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            link_categories(&mut tx, id, &categories).await?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn push_condition(builder: &mut QueryBuilder<'_, Sqlite>, has_where: &mut bool) {
    builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

impl SqlitePostReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &PostFilter) {
        let mut has_where = false;

        if let Some(header) = &filter.header {
            push_condition(builder, &mut has_where);
            builder.push("header_folded LIKE ");
            builder.push_bind(format!("%{}%", escape_like(&fold_header(header))));
            builder.push(" ESCAPE '\\'");
        }
        if let Some(author) = filter.author {
            push_condition(builder, &mut has_where);
            builder.push("author_id = ");
            builder.push_bind(i64::from(author));
        }
        if let Some(after) = filter.created_after {
            push_condition(builder, &mut has_where);
            builder.push("created_at >= ");
            builder.push_bind(after);
        }
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let mut count: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(*) FROM posts");
        Self::apply_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
        Self::apply_filter(&mut select, filter);
        select.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        select.push_bind(i64::from(page.per_page()));
        select.push(" OFFSET ");
        select.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = select
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((posts, u64::try_from(total).unwrap_or_default()))
    }
}
