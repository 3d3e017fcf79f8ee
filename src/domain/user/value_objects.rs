// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

/// Name of the group whose members may write posts.
pub const AUTHORS_GROUP: &str = "authors";

/// Identity of a user as issued by the external identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}

/// Capabilities implied by membership of a group. Unknown groups grant nothing.
pub fn group_capabilities(group: &str) -> HashSet<Capability> {
    use Capability as Cap;
    match group {
        AUTHORS_GROUP => HashSet::from([
            Cap::new("posts", "add"),
            Cap::new("posts", "change"),
            Cap::new("posts", "delete"),
        ]),
        _ => HashSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authors_can_write_posts() {
        let caps = group_capabilities(AUTHORS_GROUP);
        assert!(caps.iter().any(|c| c.matches("posts", "add")));
        assert!(caps.iter().any(|c| c.matches("posts", "change")));
        assert!(caps.iter().any(|c| c.matches("posts", "delete")));
    }

    #[test]
    fn unknown_group_grants_nothing() {
        assert!(group_capabilities("readers").is_empty());
    }

    #[test]
    fn user_id_must_be_positive() {
        assert!(UserId::new(0).is_err());
        assert_eq!(i64::from(UserId::new(7).unwrap()), 7);
    }
}
