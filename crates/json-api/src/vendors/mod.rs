//! Vendors HTTP API

mod errors;
mod handlers;
mod pagination;
mod requests;
mod responses;

pub(crate) use handlers::*;
#[cfg(test)]
pub(crate) use responses::{VendorCountResponse, VendorResponse};
