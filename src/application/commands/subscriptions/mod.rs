// src/application/commands/subscriptions/mod.rs
mod service;
mod subscribe;

pub use service::SubscriptionCommandService;
pub use subscribe::SubscribeCommand;
