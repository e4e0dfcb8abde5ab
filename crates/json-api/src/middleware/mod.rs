//! HTTP middleware

mod cors;
#[path = "security_headers.rs"]
mod security_headers_mw;

pub(crate) use cors::cors_handler;
pub(crate) use security_headers_mw::security_headers;
