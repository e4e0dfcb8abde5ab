//! Get Vendor Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    vendors::{errors::into_status_error, responses::VendorResponse},
};

/// Get Vendor Handler
///
/// Soft-deleted vendors are still returned.
#[endpoint(
    tags("vendors"),
    summary = "Get Vendor",
    responses(
        (status_code = StatusCode::OK, description = "Vendor"),
        (status_code = StatusCode::NOT_FOUND, description = "Vendor not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<VendorResponse>, StatusError> {
    let state = depot.state()?;

    let vendor = state
        .app
        .vendors
        .get_vendor_by_id(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(vendor.into()))
}
