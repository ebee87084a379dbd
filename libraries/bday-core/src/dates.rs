//! Date parsing, formatting, and birthday matching
//!
//! Dates of birth travel through the system as strings and are parsed lazily.
//! Unparsable input degrades rather than failing: it formats as itself and
//! never matches a scan date.

use chrono::{DateTime, Datelike, NaiveDate};

/// Parse a date-of-birth string.
///
/// Accepts plain `YYYY-MM-DD` dates and RFC 3339 timestamps.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.date_naive())
}

/// Render a date string in long form, e.g. `5 March 1990`.
///
/// Unparsable input is returned verbatim as the placeholder.
pub fn format_long(s: &str) -> String {
    match parse_date(s) {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => s.to_string(),
    }
}

/// Whether a date of birth falls on `today`, comparing month and day only.
///
/// The birth year is ignored, so this fires every year. A 29 February birthday
/// matches 29 February in leap years and 28 February in common years, so it is
/// never skipped. Unparsable dates never match.
pub fn matches_today(date_of_birth: &str, today: NaiveDate) -> bool {
    let Some(dob) = parse_date(date_of_birth) else {
        return false;
    };

    if dob.month() == today.month() && dob.day() == today.day() {
        return true;
    }

    // Leap-day birthdays celebrate on 28 February in common years.
    dob.month() == 2
        && dob.day() == 29
        && today.month() == 2
        && today.day() == 28
        && NaiveDate::from_ymd_opt(today.year(), 2, 29).is_none()
}
