// src/domain/author/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Author, AuthorId};
pub use repository::AuthorRepository;
