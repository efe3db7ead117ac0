//! # Utilities Library
//!
//! Shared helpers for image data URLs, environment variables, time, and input validation.

pub mod b64;
pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use b64::{decode_data_url, encode_data_url, is_data_url, DataUrl};
pub use envs::{get_env, get_env_or, get_env_parse};
pub use time::{elapsed_ms, format_listing_date, now_utc, parse_utc};
pub use validation::{validate_email, validate_min_length, validate_not_empty};
