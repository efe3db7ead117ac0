//! # Data Transfer Objects (DTOs)
//!
//! Request and response bodies exchanged with the hosted backend.
//!
//! ## Module Organization
//!
//! - [`document`] - `$id`/`$createdAt` envelope, list responses, create/update bodies
//! - [`product`] - product collection documents
//! - [`purchase_request`] - purchase-request collection documents
//! - [`account`] - sessions, users, credentials and error responses
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /v1/databases/{databaseId}/collections/{collectionId}/documents
//! Content-Type: application/json
//!
//! {
//!   "documentId": "3f1c9b2e8a7d4c5b9e0f1a2b3c4d5e6f",
//!   "data": {
//!     "userId": "6650d2a1b3",
//!     "category": "Vehicles",
//!     "product_name": "Bike",
//!     "product_description": "Barely used",
//!     "price": 1500,
//!     "image1": "https://cloud.appwrite.io/v1/storage/buckets/b/files/f/view?project=p&mode=admin"
//!   }
//! }
//! ```

pub mod account;
pub mod document;
pub mod product;
pub mod purchase_request;

pub use account::*;
pub use document::*;
pub use product::*;
pub use purchase_request::*;
