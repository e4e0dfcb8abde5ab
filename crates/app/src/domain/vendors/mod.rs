//! Vendors

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;
mod validation;

pub use errors::{VendorLookup, VendorsServiceError};
pub use service::*;
