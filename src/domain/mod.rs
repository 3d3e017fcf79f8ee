// src/domain/mod.rs
pub mod author;
pub mod category;
pub mod censor;
pub mod errors;
pub mod pagination;
pub mod post;
pub mod user;
