// tests/support/helpers.rs
use super::mocks::{
    AUTHOR_USER_ID, CapturingQueue, FixedClock, InMemoryNews, RecordingCache, StaticTokenManager,
    StubRenderer,
};
use axum::body;
use axum::http::StatusCode;
use newsroom::application::services::{ApplicationServices, ServiceDependencies};
use newsroom::domain::censor::ProfanityFilter;
use newsroom::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Author profile linked to the author token's user.
pub const AUTHOR_ID: i64 = 10;

/// Services wired to in-memory doubles, with handles kept for inspection.
pub struct TestContext {
    pub store: Arc<InMemoryNews>,
    pub cache: Arc<RecordingCache>,
    pub queue: Arc<CapturingQueue>,
    pub services: Arc<ApplicationServices>,
}

/// Seeded with one author profile and the categories Sport (1), Culture (2) and Economy (3).
pub fn seeded_store() -> InMemoryNews {
    InMemoryNews::default()
        .with_author(AUTHOR_ID, AUTHOR_USER_ID)
        .with_category(1, "Sport")
        .with_category(2, "Culture")
        .with_category(3, "Economy")
}

pub fn build_test_context() -> TestContext {
    build_test_context_with(seeded_store())
}

pub fn build_test_context_with(store: InMemoryNews) -> TestContext {
    let store = Arc::new(store);
    let cache = Arc::new(RecordingCache::default());
    let queue = Arc::new(CapturingQueue::default());

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        post_write_repo: store.clone(),
        post_read_repo: store.clone(),
        author_repo: store.clone(),
        category_repo: store.clone(),
        subscription_repo: store.clone(),
        post_cache: cache.clone(),
        notifications: queue.clone(),
        renderer: Arc::new(StubRenderer),
        token_manager: Arc::new(StaticTokenManager),
        censor: Arc::new(ProfanityFilter::default()),
        clock: Arc::new(FixedClock),
    }));

    TestContext {
        store,
        cache,
        queue,
        services,
    }
}

impl TestContext {
    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router_with_rate_limiter(state, &["http://localhost:3000".to_string()], false)
    }
}

pub fn make_test_router() -> axum::Router {
    build_test_context().router()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: axum::response::Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

pub fn assert_redirect(resp: &axum::response::Response, location: &str) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let actual = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(actual, location);
}
