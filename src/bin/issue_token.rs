//! Mint a bearer token with the configured root key.
//!
//! Usage: `issue_token <user_id> <username> [email] [group,...]`
use anyhow::{Context, Result, bail};
use newsroom::application::{dto::TokenSubject, ports::security::TokenManager};
use newsroom::config::AppConfig;
use newsroom::domain::user::UserId;
use newsroom::infrastructure::security::BiscuitTokenManager;
use std::collections::HashSet;

const USAGE: &str = "usage: issue_token <user_id> <username> [email] [group,...]";

fn parse_subject(args: &[String]) -> Result<TokenSubject> {
    let (raw_id, username) = match args {
        [id, name, ..] => (id, name),
        _ => bail!(USAGE),
    };
    if args.len() > 4 {
        bail!(USAGE);
    }

    let user_id = raw_id
        .parse::<i64>()
        .context("user_id must be an integer")
        .and_then(|id| UserId::new(id).map_err(anyhow::Error::from))?;
    let email = args.get(2).filter(|e| !e.is_empty() && *e != "-").cloned();
    let groups: HashSet<String> = args
        .get(3)
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(TokenSubject {
        user_id,
        username: username.clone(),
        email,
        groups,
        capabilities: HashSet::new(),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let subject = parse_subject(&args)?;

    let config = AppConfig::from_env()?;
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let issued = manager.issue(subject).await?;

    println!("{}", issued.token);
    eprintln!("expires at {}", issued.expires_at.to_rfc3339());
    Ok(())
}
