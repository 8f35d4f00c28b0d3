//! AlertMailer port for outbound notification emails.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the outbound mail transport.
#[derive(Debug, Clone, Error)]
pub enum MailError {
    /// The message could not be constructed (bad address, bad header).
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// The relay rejected the message or was unreachable.
    #[error("send failed: {0}")]
    SendFailed(String),
}

impl MailError {
    pub fn invalid_message(message: impl Into<String>) -> Self {
        MailError::InvalidMessage(message.into())
    }

    pub fn send_failed(message: impl Into<String>) -> Self {
        MailError::SendFailed(message.into())
    }
}

/// Port for sending plain-text alert emails.
#[async_trait]
pub trait AlertMailer: Send + Sync {
    /// Send one plain-text email to a single recipient.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}
