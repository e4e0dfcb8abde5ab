//! Vendor Data

/// New Vendor Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewVendor {
    pub company_name: String,
    pub contact_person: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub is_active: bool,
}

impl NewVendor {
    /// Active vendor with only the required fields set.
    #[must_use]
    pub fn new(company_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            contact_person: None,
            email: email.into(),
            phone_number: None,
            is_active: true,
        }
    }
}

/// Vendor Update Data
///
/// Fields left as `None` are not touched. Nullable columns use a nested
/// option so that `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorUpdate {
    pub company_name: Option<String>,
    pub contact_person: Option<Option<String>>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl VendorUpdate {
    /// Patch that only flips the vendor to inactive.
    #[must_use]
    pub fn deactivate() -> Self {
        Self {
            is_active: Some(false),
            ..Self::default()
        }
    }
}
