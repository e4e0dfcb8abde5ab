//! Delete Vendor Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{extensions::*, vendors::errors::into_status_error};

/// Delete Vendor Handler
///
/// Deactivates the vendor unless `permanent=true`, which removes it.
#[endpoint(
    tags("vendors"),
    summary = "Delete Vendor",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Vendor deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Vendor not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "vendors.delete", skip(uuid, permanent, depot), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    permanent: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state()?;
    let uuid = uuid.into_inner();
    let permanent = permanent.into_inner().unwrap_or(false);

    state
        .app
        .vendors
        .delete_vendor(uuid.into(), permanent)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
