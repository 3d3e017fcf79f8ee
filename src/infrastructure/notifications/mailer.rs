// src/infrastructure/notifications/mailer.rs
use crate::application::error::ApplicationError;
use crate::application::{
    ApplicationResult,
    ports::notification::{Mailer, NotificationJob},
};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
}

/// Delivers notifications as HTML e-mail over SMTP.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> ApplicationResult<Self> {
        let from = settings
            .from
            .parse::<Mailbox>()
            .map_err(|err| ApplicationError::validation(format!("invalid sender address: {err}")))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|err| ApplicationError::infrastructure(format!("failed to create SMTP transport: {err}")))?
            .port(settings.port);
        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, job: &NotificationJob) -> ApplicationResult<()> {
        let to = job
            .recipient
            .parse::<Mailbox>()
            .map_err(|err| ApplicationError::validation(format!("invalid recipient address: {err}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(job.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(job.body.clone())
            .map_err(|err| ApplicationError::infrastructure(format!("failed to build email: {err}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("failed to send email: {err}")))?;
        Ok(())
    }
}

/// Mailer used when no SMTP relay is configured: jobs are written to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, job: &NotificationJob) -> ApplicationResult<()> {
        info!(
            job_id = %job.id,
            recipient = %job.recipient,
            subject = %job.subject,
            body_len = job.body.len(),
            "notification (not sent, SMTP disabled)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(from: &str) -> SmtpSettings {
        SmtpSettings {
            host: "smtp.example.com".into(),
            port: 587,
            username: Some("mailer".into()),
            password: Some("secret".into()),
            from: from.into(),
        }
    }

    #[tokio::test]
    async fn builds_transport_for_valid_settings() {
        assert!(SmtpMailer::new(&settings("Newsroom <news@example.com>")).is_ok());
    }

    #[tokio::test]
    async fn rejects_invalid_sender() {
        let err = SmtpMailer::new(&settings("not an address")).err().unwrap();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    #[tokio::test]
    async fn log_mailer_accepts_everything() {
        let job = NotificationJob::new("subject", "reader@example.com", "<p>hi</p>");
        assert!(LogMailer.send(&job).await.is_ok());
    }
}
