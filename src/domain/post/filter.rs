// src/domain/post/filter.rs
use crate::domain::author::AuthorId;
use crate::domain::post::entity::Post;
use chrono::{DateTime, Utc};

/// Case folding shared by the in-memory match and the stored `header_folded` column.
pub fn fold_header(value: &str) -> String {
    value.to_lowercase()
}

/// Narrowing criteria for the post search. An empty filter matches every post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Case-insensitive substring of the header.
    pub header: Option<String>,
    pub author: Option<AuthorId>,
    /// Inclusive lower bound on the creation time.
    pub created_after: Option<DateTime<Utc>>,
}

impl PostFilter {
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.author.is_none() && self.created_after.is_none()
    }

    pub fn matches(&self, post: &Post) -> bool {
        if let Some(needle) = &self.header {
            if !fold_header(post.header.as_str()).contains(&fold_header(needle)) {
                return false;
            }
        }
        if let Some(author) = self.author {
            if post.author_id != author {
                return false;
            }
        }
        if let Some(after) = self.created_after {
            if post.created_at < after {
                return false;
            }
        }
        true
    }
}
