// src/infrastructure/mod.rs
pub mod cache;
pub mod database;
pub mod notifications;
pub mod repositories;
pub mod security;
pub mod time;
