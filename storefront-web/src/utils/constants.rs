//! Application constants
//!
//! Backend identifiers are baked in at build time from the same `APPWRITE_*`
//! variables the native tools read, with development defaults.

use lib_core::config::{
    DEFAULT_BUCKET_ID, DEFAULT_ENDPOINT, DEFAULT_PRODUCT_COLLECTION_ID,
    DEFAULT_PURCHASE_REQUEST_COLLECTION_ID,
};
use lib_core::{BackendConfig, Taxonomy};

macro_rules! env_or {
    ($name:literal, $default:expr) => {
        match option_env!($name) {
            Some(value) => value,
            None => $default,
        }
    };
}

pub const APPWRITE_ENDPOINT: &str = env_or!("APPWRITE_ENDPOINT", DEFAULT_ENDPOINT);
pub const APPWRITE_PROJECT_ID: &str = env_or!("APPWRITE_PROJECT_ID", "storefront");
pub const APPWRITE_DATABASE_ID: &str = env_or!("APPWRITE_DATABASE_ID", "storefront");
pub const APPWRITE_PRODUCT_COLLECTION_ID: &str =
    env_or!("APPWRITE_PRODUCT_COLLECTION_ID", DEFAULT_PRODUCT_COLLECTION_ID);
pub const APPWRITE_PURCHASE_REQUEST_COLLECTION_ID: &str = env_or!(
    "APPWRITE_PURCHASE_REQUEST_COLLECTION_ID",
    DEFAULT_PURCHASE_REQUEST_COLLECTION_ID
);
pub const APPWRITE_BUCKET_ID: &str = env_or!("APPWRITE_BUCKET_ID", DEFAULT_BUCKET_ID);

/// Optional taxonomy override as JSON (see `Taxonomy::from_json`).
pub const TAXONOMY_JSON: Option<&str> = option_env!("STOREFRONT_TAXONOMY");

/// localStorage key holding the session fallback cookie.
pub const SESSION_STORAGE_KEY: &str = "storefront.session";

// UI constants
pub const NOTICE_DURATION_MS: u32 = 3000;

pub fn backend_config() -> BackendConfig {
    let mut config = BackendConfig::new(APPWRITE_ENDPOINT, APPWRITE_PROJECT_ID, APPWRITE_DATABASE_ID);
    config.product_collection_id = APPWRITE_PRODUCT_COLLECTION_ID.to_string();
    config.purchase_request_collection_id = APPWRITE_PURCHASE_REQUEST_COLLECTION_ID.to_string();
    config.bucket_id = APPWRITE_BUCKET_ID.to_string();
    config
}

/// Taxonomy from [`TAXONOMY_JSON`], or the default when unset or invalid.
pub fn taxonomy() -> Taxonomy {
    match TAXONOMY_JSON.map(Taxonomy::from_json) {
        Some(Ok(taxonomy)) => taxonomy,
        Some(Err(e)) => {
            log::warn!("Ignoring STOREFRONT_TAXONOMY: {}", e);
            Taxonomy::default()
        }
        None => Taxonomy::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config_is_valid() {
        let config = backend_config();
        assert!(config.validate().is_ok(), "{:?}", config);
        assert!(!config.endpoint.ends_with('/'));
    }
}
