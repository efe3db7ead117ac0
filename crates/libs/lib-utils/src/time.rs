//! # Time Utilities
//!
//! Parsing the remote documents' `$createdAt` stamps and showing them on listings.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

/// Milliseconds since `start`, for request timing.
///
/// Uses the wall clock so it also works in the browser.
pub fn elapsed_ms(start: DateTime<Utc>) -> i64 {
    (Utc::now() - start).num_milliseconds()
}

/// Short listing date, e.g. `Mar 4, 2025`.
pub fn format_listing_date(time: DateTime<Utc>) -> String {
    time.format("%b %-d, %Y").to_string()
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_listing_date() {
        let time = parse_utc("2025-03-04T10:15:00.000+00:00").unwrap();
        assert_eq!(format_listing_date(time), "Mar 4, 2025");
    }

    #[test]
    fn test_elapsed_ms_is_non_negative() {
        let start = now_utc() - chrono::Duration::milliseconds(5);
        assert!(elapsed_ms(start) >= 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_utc("yesterday").is_err());
    }
}
