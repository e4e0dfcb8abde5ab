//! Vendors service errors.

use std::fmt::{Display, Formatter, Result as FmtResult};

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::vendors::records::VendorUuid;

pub(crate) const EMAIL_UNIQUE_CONSTRAINT: &str = "vendors_email_key";
pub(crate) const PHONE_UNIQUE_CONSTRAINT: &str = "vendors_phone_number_key";

/// Key a vendor lookup was performed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorLookup {
    Uuid(VendorUuid),
    Email(String),
    Phone(String),
}

impl Display for VendorLookup {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Uuid(uuid) => write!(f, "ID {uuid}"),
            Self::Email(email) => write!(f, "email {email}"),
            Self::Phone(phone) => write!(f, "phone number {phone}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum VendorsServiceError {
    #[error("Vendor with {0} not found.")]
    NotFound(VendorLookup),

    #[error("A vendor with this email already exists.")]
    EmailAlreadyExists,

    #[error("A vendor with this phone number already exists.")]
    PhoneAlreadyExists,

    #[error("Invalid email format.")]
    InvalidEmailFormat,

    #[error("storage error: {0}")]
    Sql(#[source] Error),
}

impl From<Error> for VendorsServiceError {
    fn from(error: Error) -> Self {
        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        if database_error.kind() != ErrorKind::UniqueViolation {
            return Self::Sql(error);
        }

        match database_error.constraint() {
            Some(EMAIL_UNIQUE_CONSTRAINT) => Self::EmailAlreadyExists,
            Some(PHONE_UNIQUE_CONSTRAINT) => Self::PhoneAlreadyExists,
            Some(_) | None => Self::Sql(error),
        }
    }
}
