//! SMTP adapter - implements the AlertMailer port with lettre.

mod mailer;

pub use mailer::SmtpMailer;
