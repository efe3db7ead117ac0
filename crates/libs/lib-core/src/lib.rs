//! # Core Library
//!
//! The storefront's catalog-and-cart state model, sell-form validation,
//! configuration and error types. Everything here is synchronous and free of
//! I/O; remote calls live in `lib-appwrite`.

pub mod config;
pub mod error;
pub mod listing;
pub mod model;
pub mod offer;
pub mod submission;

// Re-export commonly used types
pub use config::BackendConfig;
pub use error::{AppError, Result};
pub use listing::{parse_price, SellForm, MAX_LISTING_IMAGES};
pub use model::{
    cart_total, filter_products, Cart, CartLine, CatalogView, FilterState, Product,
    ProductFilter, ProductForCreate, ProductId, SellerProfile, Storefront, Taxonomy,
};
pub use offer::OfferForm;
pub use submission::{SubmissionGuard, SubmissionTicket};
