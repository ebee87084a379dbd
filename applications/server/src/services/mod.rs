/// Server services
pub mod mailer;
pub mod templates;

pub use mailer::{MailError, Mailer, SmtpMailer};
