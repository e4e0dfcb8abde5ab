//! Vendor Search Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    vendors::{
        errors::into_status_error,
        pagination::Pagination,
        responses::{VendorResponse, vendor_list},
    },
};

/// Vendor Search Handler
///
/// Case-insensitive substring match on company name, contact person or
/// email. An empty `q` returns an empty list.
#[endpoint(
    tags("vendors"),
    summary = "Search Vendors",
    responses(
        (status_code = StatusCode::OK, description = "Matching vendors"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid pagination"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    skip: QueryParam<i64, false>,
    limit: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<VendorResponse>>, StatusError> {
    let state = depot.state()?;
    let page = Pagination::from_query(skip, limit)?;

    let vendors = state
        .app
        .vendors
        .search_vendors(q.into_inner().unwrap_or_default(), page.skip, page.limit)
        .await
        .map_err(into_status_error)?;

    Ok(Json(vendor_list(vendors)))
}
