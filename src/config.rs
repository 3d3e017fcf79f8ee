// src/config.rs
use crate::domain::censor::DEFAULT_BANNED_WORDS;
use crate::infrastructure::cache::DEFAULT_MAX_CAPACITY as DEFAULT_CACHE_MAX_CAPACITY;
use crate::infrastructure::notifications::{DEFAULT_QUEUE_CAPACITY, SmtpSettings};
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    public_base_url: String,
    biscuit_private_key: String,
    token_ttl: Duration,
    allowed_origins: Vec<String>,
    cache: CacheDriver,
    cache_max_capacity: u64,
    censored_words: Vec<String>,
    notification_queue_capacity: usize,
    smtp: Option<SmtpSettings>,
}

/// Backend holding cached posts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheDriver {
    Memory,
    Redis { url: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://newsroom.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_SMTP_PORT: u16 = 587;

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got {value:?}"))),
        None => Ok(default),
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let database_max_connections = parse_number(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_DATABASE_MAX_CONNECTIONS,
        )?;
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let public_base_url = lookup("PUBLIC_BASE_URL")
            .unwrap_or_else(|| format!("http://{listen_addr}"));

        let biscuit_private_key = lookup("BISCUIT_ROOT_PRIVATE_KEY")
            .ok_or(ConfigError::Missing("BISCUIT_ROOT_PRIVATE_KEY"))?;
        if biscuit_private_key.len() != 64
            || !biscuit_private_key.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::Invalid(
                "BISCUIT_ROOT_PRIVATE_KEY must be a 32-byte hex string".into(),
            ));
        }

        let token_ttl_secs =
            parse_number("TOKEN_TTL_SECONDS", lookup("TOKEN_TTL_SECONDS"), DEFAULT_TOKEN_TTL_SECS)?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| split_list(&s))
            .unwrap_or_else(default_allowed_origins);

        let cache = match lookup("CACHE_DRIVER").as_deref().map(str::trim) {
            None | Some("") | Some("memory") => CacheDriver::Memory,
            Some("redis") => CacheDriver::Redis {
                url: lookup("REDIS_URL").ok_or(ConfigError::Missing("REDIS_URL"))?,
            },
            Some(other) => {
                return Err(ConfigError::Invalid(format!(
                    "CACHE_DRIVER must be `memory` or `redis`, got {other:?}"
                )));
            }
        };
        let cache_max_capacity = parse_number(
            "CACHE_MAX_CAPACITY",
            lookup("CACHE_MAX_CAPACITY"),
            DEFAULT_CACHE_MAX_CAPACITY,
        )?;

        let censored_words = lookup("CENSORED_WORDS")
            .map(|s| split_list(&s))
            .unwrap_or_else(|| DEFAULT_BANNED_WORDS.iter().map(|w| w.to_string()).collect());

        let notification_queue_capacity = parse_number(
            "NOTIFICATION_QUEUE_CAPACITY",
            lookup("NOTIFICATION_QUEUE_CAPACITY"),
            DEFAULT_QUEUE_CAPACITY,
        )?;
        if notification_queue_capacity == 0 {
            return Err(ConfigError::Invalid(
                "NOTIFICATION_QUEUE_CAPACITY must be positive".into(),
            ));
        }

        let smtp = match lookup("SMTP_HOST").filter(|h| !h.trim().is_empty()) {
            Some(host) => Some(SmtpSettings {
                host,
                port: parse_number("SMTP_PORT", lookup("SMTP_PORT"), DEFAULT_SMTP_PORT)?,
                username: lookup("SMTP_USERNAME"),
                password: lookup("SMTP_PASSWORD"),
                from: lookup("SMTP_FROM").ok_or(ConfigError::Missing("SMTP_FROM"))?,
            }),
            None => None,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            public_base_url,
            biscuit_private_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
            cache,
            cache_max_capacity,
            censored_words,
            notification_queue_capacity,
            smtp,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Base URL used for links inside notification e-mails.
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    pub fn biscuit_private_key(&self) -> &str {
        &self.biscuit_private_key
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn cache(&self) -> &CacheDriver {
        &self.cache
    }

    pub fn cache_max_capacity(&self) -> u64 {
        self.cache_max_capacity
    }

    pub fn censored_words(&self) -> &[String] {
        &self.censored_words
    }

    pub fn notification_queue_capacity(&self) -> usize {
        self.notification_queue_capacity
    }

    /// `None` when mail should be logged instead of sent.
    pub fn smtp(&self) -> Option<&SmtpSettings> {
        self.smtp.as_ref()
    }
}
