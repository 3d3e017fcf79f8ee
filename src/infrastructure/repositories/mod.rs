// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_author;
mod sqlite_category;
mod sqlite_post;
mod sqlite_subscription;

pub use error::map_sqlx;
pub use sqlite_author::SqliteAuthorRepository;
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_post::{SqlitePostReadRepository, SqlitePostWriteRepository};
pub use sqlite_subscription::SqliteSubscriptionRepository;
