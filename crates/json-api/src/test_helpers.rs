//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use tms_app::{
    context::AppContext,
    vendors::{
        MockVendorsService,
        records::{VendorRecord, VendorUuid},
    },
};

use crate::state::{ServiceInfo, State};

pub(crate) const TEST_PROJECT_NAME: &str = "Transport-Management-System";

pub(crate) fn state_with_vendors(vendors: MockVendorsService) -> Arc<State> {
    State::shared(
        AppContext::new(Arc::new(vendors)),
        ServiceInfo::new(TEST_PROJECT_NAME, "test"),
    )
}

pub(crate) fn vendors_service(vendors: MockVendorsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_vendors(vendors)))
            .push(route),
    )
}

/// Service operations a handler test may allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VendorOp {
    Create,
    GetById,
    GetByEmail,
    GetByPhone,
    List,
    Search,
    Update,
    Delete,
    CountActive,
}

/// Mock on which every operation except `allowed` must never be called.
pub(crate) fn mock_allowing(allowed: Option<VendorOp>) -> MockVendorsService {
    let mut vendors = MockVendorsService::new();
    let forbid = |op: VendorOp| allowed != Some(op);

    if forbid(VendorOp::Create) {
        vendors.expect_create_vendor().never();
    }
    if forbid(VendorOp::GetById) {
        vendors.expect_get_vendor_by_id().never();
    }
    if forbid(VendorOp::GetByEmail) {
        vendors.expect_get_vendor_by_email().never();
    }
    if forbid(VendorOp::GetByPhone) {
        vendors.expect_get_vendor_by_phone().never();
    }
    if forbid(VendorOp::List) {
        vendors.expect_list_vendors().never();
    }
    if forbid(VendorOp::Search) {
        vendors.expect_search_vendors().never();
    }
    if forbid(VendorOp::Update) {
        vendors.expect_update_vendor().never();
    }
    if forbid(VendorOp::Delete) {
        vendors.expect_delete_vendor().never();
    }
    if forbid(VendorOp::CountActive) {
        vendors.expect_count_active_vendors().never();
    }

    vendors
}

pub(crate) fn make_vendor(uuid: VendorUuid) -> VendorRecord {
    VendorRecord {
        uuid,
        company_name: "Acme Freight".to_string(),
        contact_person: Some("Jane Doe".to_string()),
        email: "ops@acme.test".to_string(),
        phone_number: Some("555-0100".to_string()),
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
