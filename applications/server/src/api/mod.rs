/// API route modules
pub mod birthdays;
pub mod health;
