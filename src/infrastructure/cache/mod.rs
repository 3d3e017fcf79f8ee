// src/infrastructure/cache/mod.rs
mod memory;
mod redis_cache;

pub use memory::{DEFAULT_MAX_CAPACITY, MokaPostCache};
pub use redis_cache::RedisPostCache;
