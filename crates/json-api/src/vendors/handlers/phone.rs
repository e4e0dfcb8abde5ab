//! Get Vendor By Phone Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    vendors::{errors::into_status_error, responses::VendorResponse},
};

/// Get Vendor By Phone Handler
#[endpoint(
    tags("vendors"),
    summary = "Get Vendor By Phone Number",
    responses(
        (status_code = StatusCode::OK, description = "Vendor"),
        (status_code = StatusCode::NOT_FOUND, description = "Vendor not found"),
    ),
)]
pub(crate) async fn handler(
    phone_number: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<VendorResponse>, StatusError> {
    let state = depot.state()?;

    let vendor = state
        .app
        .vendors
        .get_vendor_by_phone(phone_number.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(vendor.into()))
}
