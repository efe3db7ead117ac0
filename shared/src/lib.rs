//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the storefront and the hosted
//! Appwrite backend (database documents, storage files, account sessions).
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the REST API
//!   - **[`dto::document`]**: Generic document envelope and list responses
//!   - **[`dto::product`]**: Product documents
//!   - **[`dto::purchase_request`]**: Purchase-request ("make an offer") documents
//!   - **[`dto::account`]**: Sessions, users and error bodies
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_price`]**: Two-decimal price with thousands separators
//!
//! ## Wire Format
//!
//! Field names follow the remote collections exactly, which mixes styles:
//! `userId`, `product_name`, `bid_price`, `isRead`. Document metadata uses the
//! service's `$`-prefixed keys (`$id`, `$createdAt`). Optional image fields are
//! omitted when `None`.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::product::ProductData;
//!
//! let data = ProductData::new(
//!     "user-1",
//!     "Vehicles",
//!     "Bike",
//!     "Barely used",
//!     1500,
//!     vec!["https://via.placeholder.com/150".to_string()],
//! );
//! let json = serde_json::to_value(&data).unwrap();
//! assert_eq!(json["product_name"], "Bike");
//! assert_eq!(json["userId"], "user-1");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
