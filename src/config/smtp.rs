//! SMTP configuration for outbound alert emails

use serde::Deserialize;

use super::error::ValidationError;

/// SMTP relay configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub host: String,

    /// SMTP relay port
    #[serde(default = "default_port")]
    pub port: u16,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl SmtpConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate SMTP configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.host.is_empty() {
            return Err(ValidationError::MissingRequired("SMTP_HOST"));
        }
        if self.port == 0 {
            return Err(ValidationError::InvalidSmtpPort);
        }
        if self.username.is_empty() {
            return Err(ValidationError::MissingRequired("SMTP_USERNAME"));
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            username: String::new(),
            password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

fn default_port() -> u16 {
    587
}

fn default_from_email() -> String {
    "alerts@weatherdeck.dev".to_string()
}

fn default_from_name() -> String {
    "Weatherdeck".to_string()
}
