//! # Catalog-and-Cart Model
//!
//! In-memory state behind the storefront pages.

// region: --- Modules
pub mod cart;
pub mod filter;
pub mod product;
pub mod seed;
pub mod storefront;
pub mod taxonomy;
// endregion: --- Modules

// region: --- Re-exports
pub use cart::{cart_total, Cart, CartLine};
pub use filter::{filter_products, CatalogView, FilterState, ProductFilter};
pub use product::{
    Product, ProductForCreate, ProductId, SellerProfile, PLACEHOLDER_IMAGE, UNKNOWN_SELLER,
};
pub use seed::seed_catalog;
pub use storefront::Storefront;
pub use taxonomy::{CategoryNode, Taxonomy};
// endregion: --- Re-exports
