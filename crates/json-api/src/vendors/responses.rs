//! Vendor response bodies

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tms_app::vendors::records::VendorRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VendorResponse {
    /// The unique identifier of the vendor
    pub id: Uuid,

    pub company_name: String,

    pub contact_person: Option<String>,

    pub email: String,

    pub phone_number: Option<String>,

    /// `false` once the vendor has been soft deleted
    pub is_active: bool,

    /// The date and time the vendor was created
    pub created_at: String,

    /// The date and time the vendor was last updated
    pub updated_at: String,
}

impl From<VendorRecord> for VendorResponse {
    fn from(vendor: VendorRecord) -> Self {
        VendorResponse {
            id: vendor.uuid.into(),
            company_name: vendor.company_name,
            contact_person: vendor.contact_person,
            email: vendor.email,
            phone_number: vendor.phone_number,
            is_active: vendor.is_active,
            created_at: vendor.created_at.to_string(),
            updated_at: vendor.updated_at.to_string(),
        }
    }
}

pub(crate) fn vendor_list(vendors: Vec<VendorRecord>) -> Vec<VendorResponse> {
    vendors.into_iter().map(Into::into).collect()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VendorCountResponse {
    /// Number of vendors that have not been soft deleted
    pub active_vendors_count: u64,
}
