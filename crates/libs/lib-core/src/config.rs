//! # Backend Configuration
//!
//! Identifiers of the hosted backend: service endpoint, project, database,
//! collections and storage bucket. Native tools load them from `APPWRITE_*`
//! environment variables; the web build bakes them in at compile time.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().expect("backend configuration");
//! let bucket = &core_config().bucket_id;
//! ```

use std::sync::OnceLock;

use lib_utils::envs::{get_env, get_env_or};

use crate::error::{AppError, Result};

/// Appwrite Cloud endpoint used when `APPWRITE_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://cloud.appwrite.io/v1";
pub const DEFAULT_PRODUCT_COLLECTION_ID: &str = "products";
pub const DEFAULT_PURCHASE_REQUEST_COLLECTION_ID: &str = "product_requests";
pub const DEFAULT_BUCKET_ID: &str = "product_images";

/// Longest identifier the backend accepts.
const MAX_ID_LEN: usize = 36;

/// Hosted backend identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// API root, e.g. `https://cloud.appwrite.io/v1` (no trailing slash).
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub product_collection_id: String,
    pub purchase_request_collection_id: String,
    pub bucket_id: String,
}

impl BackendConfig {
    /// Build a config with the default collection and bucket ids.
    pub fn new(
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        database_id: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            database_id: database_id.into(),
            product_collection_id: DEFAULT_PRODUCT_COLLECTION_ID.to_string(),
            purchase_request_collection_id: DEFAULT_PURCHASE_REQUEST_COLLECTION_ID.to_string(),
            bucket_id: DEFAULT_BUCKET_ID.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `APPWRITE_PROJECT_ID` and `APPWRITE_DATABASE_ID` are required; the
    /// endpoint, collection and bucket ids fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(
            get_env_or("APPWRITE_ENDPOINT", DEFAULT_ENDPOINT),
            get_env("APPWRITE_PROJECT_ID")?,
            get_env("APPWRITE_DATABASE_ID")?,
        );
        config.product_collection_id =
            get_env_or("APPWRITE_PRODUCT_COLLECTION_ID", DEFAULT_PRODUCT_COLLECTION_ID);
        config.purchase_request_collection_id = get_env_or(
            "APPWRITE_PURCHASE_REQUEST_COLLECTION_ID",
            DEFAULT_PURCHASE_REQUEST_COLLECTION_ID,
        );
        config.bucket_id = get_env_or("APPWRITE_BUCKET_ID", DEFAULT_BUCKET_ID);

        Ok(config)
    }

    /// Validate endpoint scheme and identifier shapes.
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(AppError::Config(format!(
                "APPWRITE_ENDPOINT must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }

        for (name, value) in [
            ("APPWRITE_PROJECT_ID", &self.project_id),
            ("APPWRITE_DATABASE_ID", &self.database_id),
            ("APPWRITE_PRODUCT_COLLECTION_ID", &self.product_collection_id),
            ("APPWRITE_PURCHASE_REQUEST_COLLECTION_ID", &self.purchase_request_collection_id),
            ("APPWRITE_BUCKET_ID", &self.bucket_id),
        ] {
            validate_id(name, value)?;
        }

        Ok(())
    }
}

fn validate_id(name: &str, value: &str) -> Result<()> {
    let valid_chars = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    let valid_start = value.chars().next().is_some_and(|c| c.is_ascii_alphanumeric());

    if value.is_empty() || value.len() > MAX_ID_LEN || !valid_chars || !valid_start {
        return Err(AppError::Config(format!(
            "{name} must be 1-{MAX_ID_LEN} characters of a-z, A-Z, 0-9, '.', '-', '_' and start with a letter or digit"
        )));
    }
    Ok(())
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<BackendConfig> = OnceLock::new();

/// Initialize the global configuration from the environment.
///
/// # Errors
///
/// Returns an error if variables are missing or invalid, or if the config has
/// already been initialized.
pub fn init_config() -> Result<&'static BackendConfig> {
    let config = BackendConfig::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;
    Ok(core_config())
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static BackendConfig {
    CONFIG
        .get()
        .expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = BackendConfig::new("https://cloud.appwrite.io/v1/", "proj", "db");
        assert_eq!(config.endpoint, "https://cloud.appwrite.io/v1");
        assert_eq!(config.bucket_id, DEFAULT_BUCKET_ID);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = BackendConfig::new("cloud.appwrite.io", "proj", "db");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_ids() {
        let mut config = BackendConfig::new(DEFAULT_ENDPOINT, "proj", "db");
        config.bucket_id = "_images".to_string();
        assert!(config.validate().is_err());

        config.bucket_id = "a".repeat(37);
        assert!(config.validate().is_err());

        config.bucket_id = "images bucket".to_string();
        assert!(config.validate().is_err());
    }
}
