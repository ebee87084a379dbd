//! Birthday Reminder Core
//!
//! Platform-agnostic domain types, date helpers, and error handling for the
//! birthday reminder service.
//!
//! This crate defines:
//! - **Domain Types**: `BirthdayRecord` and its `RecordId`
//! - **Date Helpers**: parsing, long-form formatting, and month/day matching
//! - **Error Handling**: unified `BdayError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use bday_core::types::BirthdayRecord;
//! use bday_core::dates;
//!
//! let record = BirthdayRecord::new("Ada", "1990-03-05", "ada@example.com");
//! assert_eq!(dates::format_long(&record.date_of_birth), "5 March 1990");
//! ```

#![forbid(unsafe_code)]

pub mod dates;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{BdayError, Result};
pub use types::{BirthdayRecord, RecordId};
