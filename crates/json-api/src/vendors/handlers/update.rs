//! Update Vendor Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;
use validator::Validate as _;

use crate::{
    extensions::*,
    vendors::{
        errors::{into_status_error, validation_error},
        requests::UpdateVendorRequest,
        responses::VendorResponse,
    },
};

/// Update Vendor Handler
///
/// Applies a partial update; omitted fields keep their stored values.
#[endpoint(
    tags("vendors"),
    summary = "Update Vendor",
    responses(
        (status_code = StatusCode::OK, description = "Vendor updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Vendor not found"),
        (status_code = StatusCode::CONFLICT, description = "Email or phone number already in use"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid vendor payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "vendors.update",
    skip(uuid, json, depot),
    fields(vendor_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateVendorRequest>,
    depot: &mut Depot,
) -> Result<Json<VendorResponse>, StatusError> {
    let state = depot.state()?;
    let uuid = uuid.into_inner();
    let request = json.into_inner().sanitized();

    tracing::Span::current().record("vendor_uuid", tracing::field::display(uuid));

    request.validate().map_err(validation_error)?;

    let vendor = state
        .app
        .vendors
        .update_vendor(uuid.into(), request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(vendor.into()))
}
