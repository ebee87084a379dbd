//! Birthday Reminder Server Library
//!
//! HTTP API over the birthday record store, with confirmation emails on
//! registration and a daily scanner that mails everyone whose birthday
//! matches the current date.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod jobs;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use jobs::scanner::BirthdayScanner;
pub use services::mailer::{MailError, Mailer, SmtpMailer};
pub use state::AppState;
