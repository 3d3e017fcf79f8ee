// tests/support/mocks/cache.rs
use async_trait::async_trait;
use newsroom::application::{ApplicationResult, error::ApplicationError, ports::cache::PostCache};
use newsroom::domain::post::{Post, PostId};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Post cache that counts its traffic and can be switched into a failing mode.
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<i64, Post>>,
    pub gets: AtomicUsize,
    pub sets: AtomicUsize,
    pub invalidations: AtomicUsize,
    failing: AtomicBool,
}

impl RecordingCache {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.lock().unwrap().contains_key(&id)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }

    fn check(&self) -> ApplicationResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(ApplicationError::infrastructure("cache backend unavailable"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PostCache for RecordingCache {
    async fn get(&self, id: PostId) -> ApplicationResult<Option<Post>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.entries.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn set(&self, post: &Post) -> ApplicationResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.entries
            .lock()
            .unwrap()
            .insert(i64::from(post.id), post.clone());
        Ok(())
    }

    async fn invalidate(&self, id: PostId) -> ApplicationResult<()> {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.entries.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }
}
