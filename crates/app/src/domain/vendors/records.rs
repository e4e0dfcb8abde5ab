//! Vendor Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Vendor UUID
pub type VendorUuid = TypedUuid<VendorRecord>;

/// Vendor Record
#[derive(Debug, Clone, PartialEq)]
pub struct VendorRecord {
    /// Unique vendor identifier, assigned on creation.
    pub uuid: VendorUuid,

    /// Registered company name.
    pub company_name: String,

    /// Primary contact at the vendor.
    pub contact_person: Option<String>,

    /// Contact email, unique across vendors.
    pub email: String,

    /// Contact phone number, unique across vendors when present.
    pub phone_number: Option<String>,

    /// `false` once the vendor has been soft-deleted.
    pub is_active: bool,

    /// Vendor creation timestamp.
    pub created_at: Timestamp,

    /// Last mutation timestamp.
    pub updated_at: Timestamp,
}
