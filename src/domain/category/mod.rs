// src/domain/category/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryId, CategoryName, CategorySubscriber, NewSubscription};
pub use repository::{CategoryRepository, SubscriptionRepository};
