//! Get Vendor By Email Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    vendors::{errors::into_status_error, responses::VendorResponse},
};

/// Get Vendor By Email Handler
#[endpoint(
    tags("vendors"),
    summary = "Get Vendor By Email",
    responses(
        (status_code = StatusCode::OK, description = "Vendor"),
        (status_code = StatusCode::NOT_FOUND, description = "Vendor not found"),
    ),
)]
pub(crate) async fn handler(
    email: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<VendorResponse>, StatusError> {
    let state = depot.state()?;

    let vendor = state
        .app
        .vendors
        .get_vendor_by_email(email.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(vendor.into()))
}
