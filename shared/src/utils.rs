//! # Shared Utility Functions
//!
//! Display helpers used by both the web front-end and the seed CLI.
//!
//! ## Price Formatting
//!
//! Prices are whole currency units; they are always shown with two decimals:
//! - [`format_price`] - `$1,500.00`
//! - [`format_line_total`] - price × quantity, formatted the same way
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_price;
//!
//! assert_eq!(format_price(1500), "$1,500.00");
//! ```

/// Format a whole-unit price with a currency sign, thousands separators and two decimals.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(0), "$0.00");
/// assert_eq!(format_price(35), "$35.00");
/// assert_eq!(format_price(1234567), "$1,234,567.00");
/// ```
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${}.00", grouped)
}

/// Format the total of a cart line.
pub fn format_line_total(price: u64, quantity: u32) -> String {
    format_price(price.saturating_mul(u64::from(quantity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(5), "$5.00");
        assert_eq!(format_price(120), "$120.00");
        assert_eq!(format_price(2000), "$2,000.00");
        assert_eq!(format_price(100000), "$100,000.00");
    }

    #[test]
    fn test_format_line_total() {
        assert_eq!(format_line_total(250, 4), "$1,000.00");
    }
}
