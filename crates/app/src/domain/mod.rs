//! Transport Management Domain Concerns

pub mod vendors;
