// src/presentation/http/controllers/mod.rs
pub mod posts;
pub mod subscriptions;

use serde::Deserialize;
use utoipa::IntoParams;

fn default_page() -> u32 {
    1
}

/// `?page=N`, 1-based.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: u32,
}
