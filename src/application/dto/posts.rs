use crate::domain::censor::ProfanityFilter;
use crate::domain::post::{Post, PostFilter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Page;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub author_id: i64,
    pub header: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl PostDto {
    /// Same as the `From` conversion but with header and text passed through `filter`.
    pub fn censored(post: Post, filter: &ProfanityFilter) -> Self {
        Self {
            id: post.id.into(),
            author_id: post.author_id.into(),
            header: filter.censor(post.header.as_str()),
            text: filter.censor(post.text.as_str()),
            created_at: post.created_at,
        }
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            author_id: post.author_id.into(),
            header: post.header.into_inner(),
            text: post.text.into_inner(),
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostFilterDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,
}

impl From<&PostFilter> for PostFilterDto {
    fn from(filter: &PostFilter) -> Self {
        Self {
            header: filter.header.clone(),
            author: filter.author.map(Into::into),
            created_after: filter.created_after,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostListingDto {
    pub posts: Page<PostDto>,
    /// True unless the requesting identity belongs to the authors group.
    pub is_not_author: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<PostFilterDto>,
}
