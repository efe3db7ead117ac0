//! # Validation Utilities
//!
//! Input validation helpers shared by the sell form and the login page.

/// Validate that a string is not empty after trimming.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check).
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("Invalid email format".to_string()),
    }
}

/// Validate minimum length in characters.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Alice", "Seller name").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Seller name"),
            Err("Seller name cannot be empty".to_string())
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("seller@example.com").is_ok());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("seller@localhost").is_err());
        assert!(validate_email("invalid").is_err());
    }

    #[test]
    fn test_validate_min_length() {
        assert!(validate_min_length("password1", 8, "Password").is_ok());
        assert!(validate_min_length("short", 8, "Password").is_err());
    }
}
