// src/domain/user/mod.rs
pub mod value_objects;

pub use value_objects::{AUTHORS_GROUP, Capability, UserId, group_capabilities};
