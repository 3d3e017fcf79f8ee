// tests/support/mocks/security.rs
use async_trait::async_trait;
use newsroom::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use newsroom::domain::user::{AUTHORS_GROUP, UserId, group_capabilities};
use std::collections::HashSet;

use super::time::fixed_now;

/// Member of the authors group with an author profile and an e-mail address.
pub const AUTHOR_TOKEN: &str = "author-token";
/// Authenticated user outside the authors group.
pub const READER_TOKEN: &str = "reader-token";
/// Member of the authors group without an author profile.
pub const NO_AUTHOR_TOKEN: &str = "no-author-token";

pub const AUTHOR_USER_ID: i64 = 1;
pub const READER_USER_ID: i64 = 2;
pub const NO_AUTHOR_USER_ID: i64 = 3;
pub const AUTHOR_EMAIL: &str = "author@example.com";

fn identity(id: i64, username: &str, email: Option<&str>, groups: &[&str]) -> AuthenticatedUser {
    let groups: HashSet<String> = groups.iter().map(|g| g.to_string()).collect();
    let capabilities = groups.iter().flat_map(|g| group_capabilities(g)).collect();
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: username.into(),
        email: email.map(str::to_string),
        groups,
        capabilities,
        issued_at: fixed_now(),
        expires_at: fixed_now() + chrono::Duration::hours(1),
    }
}

pub fn author_identity() -> AuthenticatedUser {
    identity(AUTHOR_USER_ID, "author", Some(AUTHOR_EMAIL), &[AUTHORS_GROUP])
}

pub fn reader_identity() -> AuthenticatedUser {
    identity(READER_USER_ID, "reader", Some("reader@example.com"), &[])
}

/// Accepts a fixed set of opaque tokens.
#[derive(Default)]
pub struct StaticTokenManager;

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            AUTHOR_TOKEN => Ok(author_identity()),
            READER_TOKEN => Ok(reader_identity()),
            NO_AUTHOR_TOKEN => Ok(identity(NO_AUTHOR_USER_ID, "ghost", None, &[AUTHORS_GROUP])),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
