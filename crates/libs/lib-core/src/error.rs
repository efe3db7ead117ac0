//! # Centralized Error Handling
//!
//! This module defines the storefront-wide error type [`AppError`]. It follows the
//! `thiserror` pattern used across the workspace.
//!
//! ## Error Categories
//!
//! 1. **Local errors** - raised before any remote call is made
//!    - [`Validation`](AppError::Validation) - bad sell-form or login input
//!    - [`Config`](AppError::Config) - missing or malformed backend settings
//!
//! 2. **Remote errors** - the hosted backend failed or refused a call
//!    - [`RemoteRead`](AppError::RemoteRead) - list/get queries
//!    - [`RemoteWrite`](AppError::RemoteWrite) - create/update/delete documents
//!    - [`RemoteUpload`](AppError::RemoteUpload) - image uploads
//!    - [`Auth`](AppError::Auth) - session and account calls
//!    - [`NotFound`](AppError::NotFound) - the document or session does not exist
//!    - [`Decoding`](AppError::Decoding) - a response body did not match the DTOs
//!
//! No error is fatal. A failed user action leaves the in-memory catalog and cart
//! exactly as they were, and nothing is retried.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_name(name: &str) -> Result<&str> {
//!     if name.trim().is_empty() {
//!         return Err(AppError::Validation("Product name cannot be empty".to_string()));
//!     }
//!     Ok(name)
//! }
//!
//! assert!(require_name(" ").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Storefront-wide error type.
///
/// Each variant carries a descriptive message. [`AppError::user_message`] gives the
/// text that is safe to show in the UI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Invalid user input. The message is shown to the user as-is.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A read query against the hosted database failed.
    #[error("Remote read error: {0}")]
    RemoteRead(String),

    /// A create, update or delete against the hosted database failed.
    #[error("Remote write error: {0}")]
    RemoteWrite(String),

    /// Uploading a file to hosted storage failed.
    #[error("Remote upload error: {0}")]
    RemoteUpload(String),

    /// Login, sign-up, session lookup or logout failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Requested document or session not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A response body could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(String),
}

impl AppError {
    /// Whether the error came from the hosted backend rather than local checks.
    pub fn is_remote(&self) -> bool {
        !matches!(self, AppError::Validation(_) | AppError::Config(_))
    }

    /// Get a user-friendly error message.
    ///
    /// Remote failures collapse into a generic notice so backend details do not
    /// leak into the page.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Auth(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::RemoteRead(_) => "Could not load products. Please try again.".to_string(),
            AppError::RemoteWrite(_) => "Could not save your changes. Please try again.".to_string(),
            AppError::RemoteUpload(_) => "Could not upload the image. Please try again.".to_string(),
            AppError::Config(_) | AppError::Decoding(_) => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<lib_utils::b64::Error> for AppError {
    fn from(err: lib_utils::b64::Error) -> Self {
        AppError::Validation(format!("Unreadable image data: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = AppError::Validation("Price must be a whole number greater than 0".to_string());
        assert_eq!(err.user_message(), "Price must be a whole number greater than 0");
        assert!(!err.is_remote());
    }

    #[test]
    fn test_remote_errors_hide_details() {
        let err = AppError::RemoteWrite("HTTP 500: stack trace...".to_string());
        assert!(err.is_remote());
        assert!(!err.user_message().contains("stack trace"));
        assert_eq!(err.to_string(), "Remote write error: HTTP 500: stack trace...");
    }

    #[test]
    fn test_from_env_error() {
        let err: AppError = lib_utils::envs::Error::MissingEnv("APPWRITE_PROJECT_ID").into();
        assert_eq!(err, AppError::Config("APPWRITE_PROJECT_ID must be set".to_string()));
    }
}
