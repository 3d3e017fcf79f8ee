// src/domain/post/entity.rs
use crate::domain::author::AuthorId;
use crate::domain::category::CategoryId;
use crate::domain::post::value_objects::{PostHeader, PostId, PostText};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author_id: AuthorId,
    pub header: PostHeader,
    pub text: PostText,
    pub created_at: DateTime<Utc>,
}

/// A post to be persisted together with its category associations.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: AuthorId,
    pub header: PostHeader,
    pub text: PostText,
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    /// Builds a new post, collapsing repeated category ids while keeping their order.
    pub fn new(
        author_id: AuthorId,
        header: PostHeader,
        text: PostText,
        categories: impl IntoIterator<Item = CategoryId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            author_id,
            header,
            text,
            categories: dedup_categories(categories),
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub header: Option<PostHeader>,
    pub text: Option<PostText>,
    pub categories: Option<Vec<CategoryId>>,
}

impl PostUpdate {
    pub fn new(id: PostId) -> Self {
        Self {
            id,
            header: None,
            text: None,
            categories: None,
        }
    }

    pub fn with_header(mut self, header: PostHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_text(mut self, text: PostText) -> Self {
        self.text = Some(text);
        self
    }

    /// Replaces the post's category set.
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.categories = Some(dedup_categories(categories));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.text.is_none() && self.categories.is_none()
    }
}

fn dedup_categories(categories: impl IntoIterator<Item = CategoryId>) -> Vec<CategoryId> {
    let mut unique = Vec::new();
    for id in categories {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
