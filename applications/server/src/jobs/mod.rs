/// Background jobs
pub mod scanner;

pub use scanner::BirthdayScanner;
