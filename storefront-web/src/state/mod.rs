pub mod auth;
pub mod storefront;
