//! SMTP implementation of AlertMailer.
//!
//! Sends plain-text messages through a single relay configured at startup.
//! Uses STARTTLS on the configured port (587 by default).

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::ports::{AlertMailer, MailError};

/// SMTP relay implementation of the AlertMailer port.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds the relay transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns `MailError::InvalidMessage` if the relay host or the from
    /// address cannot be parsed.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailError::invalid_message(format!("bad relay host: {}", e)))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config
            .from_header()
            .parse()
            .map_err(|e| MailError::invalid_message(format!("bad from address: {}", e)))?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl AlertMailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| MailError::invalid_message(format!("bad recipient '{}': {}", to, e)))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| MailError::invalid_message(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::send_failed(e.to_string()))?;

        Ok(())
    }
}
