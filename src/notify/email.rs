//! Email notification over SMTP.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::{Credentials, EmailConfig};
use crate::error::{Error, Result};

/// A composed notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    /// Build the end-of-run message from the configured fields.
    ///
    /// The run summary is appended below the configured body.
    pub fn compose(email: &EmailConfig, summary: &str) -> Self {
        Self {
            to: email.address.clone(),
            subject: email.subject.clone(),
            body: format!("{}\n\n{}", email.body, summary),
        }
    }
}

/// Sends one notification.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<()>;
}

/// Notifier that logs in to an SMTP relay with STARTTLS.
#[derive(Debug)]
pub struct SmtpNotifier {
    credentials: Credentials,
    server: String,
    port: u16,
}

impl SmtpNotifier {
    pub fn new(credentials: Credentials, email: &EmailConfig) -> Self {
        Self {
            credentials,
            server: email.smtp_server.clone(),
            port: email.smtp_port,
        }
    }

    fn build_message(&self, message: &EmailMessage) -> Result<Message> {
        let from: Mailbox = self
            .credentials
            .address
            .parse()
            .map_err(|e| Error::Notify(format!("Invalid sender address: {}", e)))?;
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e| Error::Notify(format!("Invalid recipient address: {}", e)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| Error::Notify(format!("Failed to build message: {}", e)))
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        let email = self.build_message(message)?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.server)
            .map_err(|e| Error::Notify(format!("SMTP setup failed: {}", e)))?
            .port(self.port)
            .credentials(SmtpCredentials::new(
                self.credentials.address.clone(),
                self.credentials.password.clone(),
            ))
            .build();

        tracing::debug!(
            "Sending notification to {} via {}:{}",
            message.to,
            self.server,
            self.port
        );

        mailer
            .send(email)
            .await
            .map_err(|e| Error::Notify(e.to_string()))?;

        Ok(())
    }
}
