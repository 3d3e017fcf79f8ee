// src/infrastructure/notifications/mod.rs
mod mailer;
mod queue;
mod templates;

pub use mailer::{LogMailer, SmtpMailer, SmtpSettings};
pub use queue::{DEFAULT_QUEUE_CAPACITY, NotificationWorker, TokioNotificationQueue};
pub use templates::TeraNotificationRenderer;
