// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, UserId, group_capabilities};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Builds the caller identity from the authority facts of a verified token.
///
/// Capabilities are the union of the rights carried explicitly and those implied by each group.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);
    build_authenticated_user(ctx)
}

fn build_authenticated_user(ctx: ClaimsContext) -> ApplicationResult<AuthenticatedUser> {
    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let username = ctx
        .username
        .ok_or_else(|| ApplicationError::unauthorized("missing username"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    let user_id = UserId::new(user_id)
        .map_err(|_| ApplicationError::unauthorized("invalid user id"))?;

    let mut capabilities = ctx.capabilities;
    for group in &ctx.groups {
        capabilities.extend(group_capabilities(group));
    }

    Ok(AuthenticatedUser {
        id: user_id,
        username,
        email: ctx.email,
        groups: ctx.groups,
        capabilities,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    email: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    groups: HashSet<String>,
    capabilities: HashSet<Capability>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("email", [Term::Str(email)]) => self.email = Some(email.clone()),
            ("group", [Term::Str(group)]) => {
                self.groups.insert(group.clone());
            }
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.capabilities
                    .insert(Capability::new(resource.clone(), action.clone()));
            }
            ("issued_at", [Term::Date(seconds)]) => {
                self.issued_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            ("expires_at", [Term::Date(seconds)]) => {
                self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::AUTHORS_GROUP;

    fn fact(name: &str, terms: Vec<Term>) -> Fact {
        Fact::new(name.to_string(), terms)
    }

    fn base_facts() -> Vec<Fact> {
        vec![
            fact("user", vec![Term::Integer(7), Term::Str("ann".into())]),
            fact("issued_at", vec![Term::Date(1_700_000_000)]),
            fact("expires_at", vec![Term::Date(1_700_003_600)]),
        ]
    }

    #[test]
    fn group_membership_grants_post_capabilities() {
        let mut facts = base_facts();
        facts.push(fact("group", vec![Term::Str(AUTHORS_GROUP.into())]));
        facts.push(fact("email", vec![Term::Str("ann@example.com".into())]));

        let user = parse_claims(facts).unwrap();
        assert_eq!(user.id, UserId::new(7).unwrap());
        assert_eq!(user.email.as_deref(), Some("ann@example.com"));
        assert!(user.is_author());
        assert!(user.has_capability("posts", "add"));
        assert!(user.has_capability("posts", "delete"));
    }

    #[test]
    fn explicit_rights_are_kept() {
        let mut facts = base_facts();
        facts.push(fact(
            "right",
            vec![Term::Str("posts".into()), Term::Str("change".into())],
        ));

        let user = parse_claims(facts).unwrap();
        assert!(!user.is_author());
        assert!(user.has_capability("posts", "change"));
        assert!(!user.has_capability("posts", "add"));
        assert!(user.email.is_none());
    }

    #[test]
    fn missing_user_is_unauthorized() {
        let facts = base_facts().into_iter().skip(1).collect();
        assert!(matches!(
            parse_claims(facts),
            Err(ApplicationError::Unauthorized(_))
        ));
    }
}
