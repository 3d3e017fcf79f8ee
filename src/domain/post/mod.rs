// src/domain/post/mod.rs
pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use filter::{PostFilter, fold_header};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{PostHeader, PostId, PostText};
