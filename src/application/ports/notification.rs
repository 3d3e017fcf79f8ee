// src/application/ports/notification.rs
use crate::application::{ApplicationResult, dto::PostDto};
use async_trait::async_trait;
use uuid::Uuid;

/// An e-mail waiting to be delivered by the background worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationJob {
    pub id: Uuid,
    pub subject: String,
    pub recipient: String,
    pub body: String,
}

impl NotificationJob {
    pub fn new(
        subject: impl Into<String>,
        recipient: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            recipient: recipient.into(),
            body: body.into(),
        }
    }
}

/// Hand-off point to the notification worker. A successful `enqueue` only means the job was
/// accepted; delivery happens later and is not reported back.
#[async_trait]
pub trait NotificationQueue: Send + Sync {
    async fn enqueue(&self, job: NotificationJob) -> ApplicationResult<()>;
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, job: &NotificationJob) -> ApplicationResult<()>;
}

pub trait NotificationRenderer: Send + Sync {
    /// Render the HTML document announcing a newly created post.
    fn render_post_created(&self, post: &PostDto) -> ApplicationResult<String>;
}
