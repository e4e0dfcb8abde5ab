//! Create Vendor Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use validator::Validate as _;

use crate::{
    extensions::*,
    vendors::{
        errors::{into_status_error, validation_error},
        requests::CreateVendorRequest,
        responses::VendorResponse,
    },
};

/// Create Vendor Handler
#[endpoint(
    tags("vendors"),
    summary = "Create Vendor",
    responses(
        (status_code = StatusCode::CREATED, description = "Vendor created"),
        (status_code = StatusCode::CONFLICT, description = "Email or phone number already in use"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid vendor payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "vendors.create",
    skip(json, depot, res),
    fields(vendor_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateVendorRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<VendorResponse>, StatusError> {
    let state = depot.state()?;
    let request = json.into_inner().sanitized();

    request.validate().map_err(validation_error)?;

    let vendor = state
        .app
        .vendors
        .create_vendor(request.into())
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("vendor_uuid", tracing::field::display(vendor.uuid));

    res.add_header(LOCATION, format!("/api/v1/vendors/{}", vendor.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(vendor.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tms_app::vendors::{
        MockVendorsService, VendorsServiceError, data::NewVendor, records::VendorUuid,
    };

    use crate::test_helpers::{VendorOp, make_vendor, mock_allowing, vendors_service};

    use super::*;

    fn make_service(vendors: MockVendorsService) -> Service {
        vendors_service(vendors, Router::with_path("vendors").post(handler))
    }

    #[tokio::test]
    async fn test_create_vendor_success() -> TestResult {
        let uuid = VendorUuid::new();
        let vendor = make_vendor(uuid);

        let mut vendors = mock_allowing(Some(VendorOp::Create));

        vendors
            .expect_create_vendor()
            .once()
            .withf(|new| {
                *new == NewVendor {
                    contact_person: Some("Jane Doe".to_string()),
                    phone_number: Some("555-0100".to_string()),
                    ..NewVendor::new("Acme Freight", "ops@acme.test")
                }
            })
            .return_once(move |_| Ok(vendor));

        let mut res = TestClient::post("http://example.com/vendors")
            .json(&json!({
                "company_name": "Acme Freight",
                "contact_person": "Jane Doe",
                "email": "ops@acme.test",
                "phone_number": "555-0100",
            }))
            .send(&make_service(vendors))
            .await;

        let body: VendorResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/v1/vendors/{uuid}").as_str()));
        assert_eq!(body.id, uuid.into_uuid());
        assert!(body.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_vendor_sanitizes_strings() -> TestResult {
        let uuid = VendorUuid::new();
        let vendor = make_vendor(uuid);

        let mut vendors = mock_allowing(Some(VendorOp::Create));

        vendors
            .expect_create_vendor()
            .once()
            .withf(|new| {
                new.company_name == "&lt;script&gt;Acme&lt;/script&gt;" && new.email == "ops@acme.test"
            })
            .return_once(move |_| Ok(vendor));

        let res = TestClient::post("http://example.com/vendors")
            .json(&json!({
                "company_name": "  <script>Acme</script> ",
                "email": " ops@acme.test ",
            }))
            .send(&make_service(vendors))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_vendor_duplicate_email_returns_409() -> TestResult {
        let mut vendors = mock_allowing(Some(VendorOp::Create));

        vendors
            .expect_create_vendor()
            .once()
            .return_once(|_| Err(VendorsServiceError::EmailAlreadyExists));

        let res = TestClient::post("http://example.com/vendors")
            .json(&json!({ "company_name": "Acme", "email": "taken@x.com" }))
            .send(&make_service(vendors))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_vendor_invalid_email_returns_422() -> TestResult {
        let mut vendors = mock_allowing(Some(VendorOp::Create));

        vendors
            .expect_create_vendor()
            .once()
            .return_once(|_| Err(VendorsServiceError::InvalidEmailFormat));

        let res = TestClient::post("http://example.com/vendors")
            .json(&json!({ "company_name": "Acme", "email": "not-an-email" }))
            .send(&make_service(vendors))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_vendor_blank_company_name_returns_422() -> TestResult {
        let res = TestClient::post("http://example.com/vendors")
            .json(&json!({ "company_name": "   ", "email": "a@x.com" }))
            .send(&make_service(mock_allowing(None)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_vendor_missing_email_is_rejected() -> TestResult {
        let res = TestClient::post("http://example.com/vendors")
            .json(&json!({ "company_name": "Acme" }))
            .send(&make_service(mock_allowing(None)))
            .await;

        assert!(
            res.status_code
                .is_some_and(|status| status.is_client_error()),
            "expected a client error, got {:?}",
            res.status_code
        );

        Ok(())
    }
}
