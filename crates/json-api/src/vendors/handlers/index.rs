//! Vendor Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    vendors::{
        errors::into_status_error,
        pagination::Pagination,
        responses::{VendorResponse, vendor_list},
    },
};

/// Vendor Index Handler
///
/// Returns vendors in insertion order, active or not.
#[endpoint(
    tags("vendors"),
    summary = "List Vendors",
    responses(
        (status_code = StatusCode::OK, description = "Vendors"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid pagination"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    skip: QueryParam<i64, false>,
    limit: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<VendorResponse>>, StatusError> {
    let state = depot.state()?;
    let page = Pagination::from_query(skip, limit)?;

    let vendors = state
        .app
        .vendors
        .list_vendors(page.skip, page.limit)
        .await
        .map_err(into_status_error)?;

    Ok(Json(vendor_list(vendors)))
}
