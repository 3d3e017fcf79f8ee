// tests/support/mocks/mod.rs
pub mod cache;
pub mod notifications;
pub mod security;
pub mod store;
pub mod time;

pub use cache::RecordingCache;
pub use notifications::{CapturingQueue, StubRenderer};
pub use security::{
    AUTHOR_EMAIL, AUTHOR_TOKEN, AUTHOR_USER_ID, NO_AUTHOR_TOKEN, READER_TOKEN, READER_USER_ID,
    StaticTokenManager, author_identity, reader_identity,
};
pub use store::InMemoryNews;
pub use time::{FixedClock, fixed_now};
