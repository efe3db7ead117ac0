//! Browser-side services: image file reading and session persistence.

pub mod images;
pub mod session;
