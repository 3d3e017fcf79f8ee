// src/infrastructure/security/mod.rs
pub mod claims;
pub mod token;

pub use token::BiscuitTokenManager;
