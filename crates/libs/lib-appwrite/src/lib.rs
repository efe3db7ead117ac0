//! # Appwrite Remote Wrappers
//!
//! Thin call-through wrappers over the hosted Appwrite REST API used by the
//! storefront: product and purchase-request documents, image storage and
//! account sessions.
//!
//! ## Module Structure
//!
//! ```text
//! lib-appwrite/
//! ├── client.rs            - AppwriteClient, headers, response handling
//! ├── queries.rs           - JSON list queries
//! ├── products.rs          - Product documents
//! ├── purchase_requests.rs - Purchase-request documents
//! ├── storage.rs           - Image upload and view URLs
//! ├── account.rs           - Login, sign-up, current user, logout
//! ├── service.rs           - StorefrontBackend trait
//! └── listing/             - Listing publication and catalog clearing
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lib_appwrite::{AppwriteClient, StorefrontBackend};
//! use lib_core::BackendConfig;
//!
//! # async fn run() -> lib_core::Result<()> {
//! let client = AppwriteClient::new(BackendConfig::from_env()?);
//! let products = client.list_products_by_category("Vehicles").await?;
//! println!("{} vehicles listed", products.len());
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod client;
pub mod listing;
pub mod products;
pub mod purchase_requests;
pub mod queries;
pub mod service;
pub mod storage;

pub use client::AppwriteClient;
pub use listing::{clear_products, publish_listing};
pub use service::StorefrontBackend;
pub use storage::file_view_url;
