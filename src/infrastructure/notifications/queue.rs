// src/infrastructure/notifications/queue.rs
use crate::application::error::ApplicationError;
use crate::application::{
    ApplicationResult,
    ports::notification::{Mailer, NotificationJob, NotificationQueue},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc::{self, Receiver, Sender, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Default number of jobs buffered before enqueues are rejected.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Bounded in-process notification queue. A full or closed queue rejects the job
/// instead of waiting.
#[derive(Clone)]
pub struct TokioNotificationQueue {
    sender: Sender<NotificationJob>,
}

impl TokioNotificationQueue {
    /// Returns the queue and the receiving end to hand to a [`NotificationWorker`].
    pub fn channel(capacity: usize) -> (Self, Receiver<NotificationJob>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl NotificationQueue for TokioNotificationQueue {
    async fn enqueue(&self, job: NotificationJob) -> ApplicationResult<()> {
        let id = job.id;
        match self.sender.try_send(job) {
            Ok(()) => {
                debug!(job_id = %id, "notification job enqueued");
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(ApplicationError::infrastructure(
                "notification queue is full",
            )),
            Err(TrySendError::Closed(_)) => Err(ApplicationError::infrastructure(
                "notification queue is closed",
            )),
        }
    }
}

/// Drains the notification queue, sending each job once.
pub struct NotificationWorker;

impl NotificationWorker {
    /// Runs until every sender has been dropped and the queue is empty.
    pub fn spawn(mut receiver: Receiver<NotificationJob>, mailer: Arc<dyn Mailer>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!("notification worker started");
            while let Some(job) = receiver.recv().await {
                match mailer.send(&job).await {
                    Ok(()) => debug!(job_id = %job.id, recipient = %job.recipient, "notification sent"),
                    Err(err) => warn!(
                        job_id = %job.id,
                        recipient = %job.recipient,
                        error = %err,
                        "failed to deliver notification"
                    ),
                }
            }
            info!("notification worker stopped");
        })
    }
}
