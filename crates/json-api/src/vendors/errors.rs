//! Vendor Errors

use salvo::http::StatusError;
use tracing::error;
use validator::ValidationErrors;

use tms_app::vendors::VendorsServiceError;

pub(crate) fn into_status_error(error: VendorsServiceError) -> StatusError {
    match error {
        VendorsServiceError::NotFound(_) => StatusError::not_found().brief(error.to_string()),
        VendorsServiceError::EmailAlreadyExists | VendorsServiceError::PhoneAlreadyExists => {
            StatusError::conflict().brief(error.to_string())
        }
        VendorsServiceError::InvalidEmailFormat => {
            StatusError::unprocessable_entity().brief(error.to_string())
        }
        VendorsServiceError::Sql(source) => {
            error!("vendor storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn validation_error(errors: ValidationErrors) -> StatusError {
    StatusError::unprocessable_entity()
        .brief("Invalid vendor payload")
        .detail(errors.to_string())
}
