// src/application/ports/mod.rs
pub mod cache;
pub mod notification;
pub mod security;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PostCachePort = dyn cache::PostCache;
pub type NotificationQueuePort = dyn notification::NotificationQueue;
pub type NotificationRendererPort = dyn notification::NotificationRenderer;
pub type MailerPort = dyn notification::Mailer;
pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
