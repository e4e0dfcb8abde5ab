//! Vendors Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::vendors::{
    data::{NewVendor, VendorUpdate},
    records::{VendorRecord, VendorUuid},
    validation::substring_pattern,
};

const GET_VENDOR_SQL: &str = include_str!("sql/get_vendor.sql");
const LIST_VENDORS_SQL: &str = include_str!("sql/list_vendors.sql");
const SEARCH_VENDORS_SQL: &str = include_str!("sql/search_vendors.sql");
const FIND_VENDOR_BY_EMAIL_SQL: &str = include_str!("sql/find_vendor_by_email.sql");
const FIND_VENDOR_BY_PHONE_SQL: &str = include_str!("sql/find_vendor_by_phone.sql");
const CREATE_VENDOR_SQL: &str = include_str!("sql/create_vendor.sql");
const UPDATE_VENDOR_SQL: &str = include_str!("sql/update_vendor.sql");
const DELETE_VENDOR_SQL: &str = include_str!("sql/delete_vendor.sql");
const COUNT_ACTIVE_VENDORS_SQL: &str = include_str!("sql/count_active_vendors.sql");

/// PostgreSQL-backed vendors repository.
///
/// Every method runs inside the caller's transaction and leaves committing
/// or rolling back to the caller.
#[derive(Debug, Clone, Default)]
pub(crate) struct PgVendorsRepository;

impl PgVendorsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_vendor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vendor: VendorUuid,
    ) -> Result<Option<VendorRecord>, sqlx::Error> {
        query_as::<Postgres, VendorRecord>(GET_VENDOR_SQL)
            .bind(vendor.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_vendors(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<VendorRecord>, sqlx::Error> {
        query_as::<Postgres, VendorRecord>(LIST_VENDORS_SQL)
            .bind(i64::from(skip))
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn search_vendors(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        term: &str,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<VendorRecord>, sqlx::Error> {
        query_as::<Postgres, VendorRecord>(SEARCH_VENDORS_SQL)
            .bind(substring_pattern(term))
            .bind(i64::from(skip))
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Option<VendorRecord>, sqlx::Error> {
        query_as::<Postgres, VendorRecord>(FIND_VENDOR_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_phone(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        phone_number: &str,
    ) -> Result<Option<VendorRecord>, sqlx::Error> {
        query_as::<Postgres, VendorRecord>(FIND_VENDOR_BY_PHONE_SQL)
            .bind(phone_number)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_vendor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vendor: VendorUuid,
        new: &NewVendor,
    ) -> Result<VendorRecord, sqlx::Error> {
        query_as::<Postgres, VendorRecord>(CREATE_VENDOR_SQL)
            .bind(vendor.into_uuid())
            .bind(&new.company_name)
            .bind(new.contact_person.as_deref())
            .bind(&new.email)
            .bind(new.phone_number.as_deref())
            .bind(new.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_vendor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        existing: &VendorRecord,
        update: &VendorUpdate,
    ) -> Result<VendorRecord, sqlx::Error> {
        query_as::<Postgres, VendorRecord>(UPDATE_VENDOR_SQL)
            .bind(existing.uuid.into_uuid())
            .bind(update.company_name.as_deref())
            .bind(update.contact_person.is_some())
            .bind(update.contact_person.as_ref().and_then(Option::as_deref))
            .bind(update.email.as_deref())
            .bind(update.phone_number.is_some())
            .bind(update.phone_number.as_ref().and_then(Option::as_deref))
            .bind(update.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_vendor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        existing: &VendorRecord,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_VENDOR_SQL)
            .bind(existing.uuid.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn count_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_ACTIVE_VENDORS_SQL)
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for VendorRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: VendorUuid::from_uuid(row.try_get("uuid")?),
            company_name: row.try_get("company_name")?,
            contact_person: row.try_get("contact_person")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
