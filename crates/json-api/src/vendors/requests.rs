//! Vendor request bodies

use salvo::oapi::ToSchema;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use tms_app::vendors::data::{NewVendor, VendorUpdate};

/// HTML-escape `& < > " '` and trim surrounding whitespace.
pub(crate) fn sanitize(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.trim().chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }

    escaped
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn default_active() -> bool {
    true
}

/// Create Vendor Request
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub(crate) struct CreateVendorRequest {
    /// Company name
    #[validate(length(min = 1, max = 255))]
    pub company_name: String,

    /// Contact person
    #[serde(default)]
    #[validate(length(max = 255))]
    pub contact_person: Option<String>,

    /// Contact email; must be unique
    #[validate(length(max = 255))]
    pub email: String,

    /// Phone number; must be unique when given
    #[serde(default)]
    #[validate(length(max = 20))]
    pub phone_number: Option<String>,

    /// Whether the vendor starts active
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CreateVendorRequest {
    /// Escape and trim every string field.
    #[must_use]
    pub(crate) fn sanitized(self) -> Self {
        Self {
            company_name: sanitize(&self.company_name),
            contact_person: self.contact_person.as_deref().map(sanitize),
            email: sanitize(&self.email),
            phone_number: self.phone_number.as_deref().map(sanitize),
            is_active: self.is_active,
        }
    }
}

impl From<CreateVendorRequest> for NewVendor {
    fn from(request: CreateVendorRequest) -> Self {
        NewVendor {
            company_name: request.company_name,
            contact_person: request.contact_person,
            email: request.email,
            phone_number: request.phone_number,
            is_active: request.is_active,
        }
    }
}

/// Update Vendor Request
///
/// Absent fields are left unchanged; `null` clears `contact_person` or
/// `phone_number`.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub(crate) struct UpdateVendorRequest {
    /// Company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub company_name: Option<String>,

    /// Contact person
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[salvo(schema(value_type = Option<String>))]
    #[validate(length(max = 255))]
    pub contact_person: Option<Option<String>>,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub email: Option<String>,

    /// Phone number
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[salvo(schema(value_type = Option<String>))]
    #[validate(length(max = 20))]
    pub phone_number: Option<Option<String>>,

    /// Active flag; `true` reactivates a soft-deleted vendor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateVendorRequest {
    /// Escape and trim every string field.
    #[must_use]
    pub(crate) fn sanitized(self) -> Self {
        Self {
            company_name: self.company_name.as_deref().map(sanitize),
            contact_person: self
                .contact_person
                .map(|value| value.as_deref().map(sanitize)),
            email: self.email.as_deref().map(sanitize),
            phone_number: self
                .phone_number
                .map(|value| value.as_deref().map(sanitize)),
            is_active: self.is_active,
        }
    }
}

impl From<UpdateVendorRequest> for VendorUpdate {
    fn from(request: UpdateVendorRequest) -> Self {
        VendorUpdate {
            company_name: request.company_name,
            contact_person: request.contact_person,
            email: request.email,
            phone_number: request.phone_number,
            is_active: request.is_active,
        }
    }
}
