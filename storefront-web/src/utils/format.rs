//! # Formatting Utilities for the Storefront
//!
//! Display strings for the catalog, cart and inbox. Price formatting itself
//! lives in [`shared::utils::format_price`].
//!
//! ## Functions
//!
//! - [`format_listing_date`] - "Listed Mar 4, 2025" for a product detail view
//! - [`format_request_time`] - short timestamp for an inbox entry
//! - [`format_item_count`] - "1 item" / "3 items"

use chrono::{DateTime, Utc};
use lib_utils::time::parse_utc;

/// Listing date line for the product modal.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use storefront_web::utils::format::format_listing_date;
///
/// let listed = Utc.with_ymd_and_hms(2025, 3, 4, 10, 15, 0).unwrap();
/// assert_eq!(format_listing_date(Some(listed)), "Listed Mar 4, 2025");
/// assert_eq!(format_listing_date(None), "Listing date unknown");
/// ```
pub fn format_listing_date(listed_at: Option<DateTime<Utc>>) -> String {
    match listed_at {
        Some(time) => format!("Listed {}", lib_utils::time::format_listing_date(time)),
        None => "Listing date unknown".to_string(),
    }
}

/// Timestamp of a purchase request as sent by the backend, or the raw text
/// when it cannot be parsed.
pub fn format_request_time(created_at: Option<&str>) -> String {
    match created_at {
        Some(raw) => match parse_utc(raw) {
            Ok(time) => time.format("%b %-d, %Y %H:%M").to_string(),
            Err(_) => raw.to_string(),
        },
        None => String::new(),
    }
}

pub fn format_item_count(count: u64) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}
