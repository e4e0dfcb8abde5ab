//! Vendor Handlers

pub(crate) mod count;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod email;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod phone;
pub(crate) mod search;
pub(crate) mod update;
