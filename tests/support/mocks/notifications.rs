// tests/support/mocks/notifications.rs
use async_trait::async_trait;
use newsroom::application::{
    ApplicationResult,
    dto::PostDto,
    error::ApplicationError,
    ports::notification::{NotificationJob, NotificationQueue, NotificationRenderer},
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Queue that keeps every accepted job for inspection.
#[derive(Default)]
pub struct CapturingQueue {
    jobs: Mutex<Vec<NotificationJob>>,
    rejecting: AtomicBool,
}

impl CapturingQueue {
    pub fn jobs(&self) -> Vec<NotificationJob> {
        self.jobs.lock().unwrap().clone()
    }

    pub fn reject_all(&self) {
        self.rejecting.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl NotificationQueue for CapturingQueue {
    async fn enqueue(&self, job: NotificationJob) -> ApplicationResult<()> {
        if self.rejecting.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("notification queue is full"));
        }
        self.jobs.lock().unwrap().push(job);
        Ok(())
    }
}

/// Renders a one-line document so tests can assert on the body.
#[derive(Default)]
pub struct StubRenderer;

impl NotificationRenderer for StubRenderer {
    fn render_post_created(&self, post: &PostDto) -> ApplicationResult<String> {
        Ok(format!("<h1>{}</h1>", post.header))
    }
}
