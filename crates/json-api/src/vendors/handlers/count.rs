//! Active Vendor Count Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    vendors::{errors::into_status_error, responses::VendorCountResponse},
};

/// Active Vendor Count Handler
#[endpoint(tags("vendors"), summary = "Count Active Vendors")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<VendorCountResponse>, StatusError> {
    let state = depot.state()?;

    let active_vendors_count = state
        .app
        .vendors
        .count_active_vendors()
        .await
        .map_err(into_status_error)?;

    Ok(Json(VendorCountResponse {
        active_vendors_count,
    }))
}
