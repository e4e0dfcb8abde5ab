//! Pagination query parameters

use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 1_000;

/// Validated `skip`/`limit` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pagination {
    pub(crate) skip: u32,
    pub(crate) limit: u32,
}

impl Pagination {
    /// `skip` defaults to 0 and must not be negative; `limit` defaults to 100
    /// and must lie in `1..=1000`.
    pub(crate) fn from_query(
        skip: QueryParam<i64, false>,
        limit: QueryParam<i64, false>,
    ) -> Result<Self, StatusError> {
        Self::new(skip.into_inner(), limit.into_inner())
    }

    pub(crate) fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, StatusError> {
        let skip = skip.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        let skip = u32::try_from(skip).or_400("skip must be a non-negative integer")?;

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(StatusError::bad_request().brief("limit must be between 1 and 1000"));
        }

        let limit = u32::try_from(limit).or_400("limit must be between 1 and 1000")?;

        Ok(Self { skip, limit })
    }
}
