use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::lifecycle::{
    DeactivationStatus, MemoryVendorStore, Principal, VendorId, VendorLifecycle, VendorRecord,
};

// tests/common/mod.rs carries copies of these fixtures for the integration
// tests. Keep the two in sync.

/// Registered vendor in state `active`
pub fn vendor(id: i64) -> VendorRecord {
    VendorRecord::registered(
        VendorId::new(id).expect("fixture ids are positive"),
        format!("Vendor {}", id),
        format!("Company {}", id),
        format!("+1 555 01{:02}", id % 100),
        format!("vendor{}@example.com", id),
    )
}

/// Vendor with an open deactivation request filed by `requested_by`
pub fn pending_deactivation(id: i64, requested_by: i64) -> VendorRecord {
    let mut record = vendor(id);
    record.deactivation_status = DeactivationStatus::PendingDeactivation;
    record.deactivation_requested_by = Some(requested_by);
    record.deactivation_requested_at = Some(Utc::now() - Duration::hours(1));
    record
}

/// Inactive vendor with an open reactivation request filed by `requested_by`
pub fn pending_activation(id: i64, requested_by: i64) -> VendorRecord {
    let mut record = vendor(id);
    record.is_active = false;
    record.deactivation_status = DeactivationStatus::PendingActivation;
    record.deactivation_requested_by = Some(requested_by);
    record.deactivation_requested_at = Some(Utc::now() - Duration::hours(1));
    record
}

/// Lifecycle manager over a seeded in-memory store
pub struct TestContext {
    pub store: Arc<MemoryVendorStore>,
    pub lifecycle: VendorLifecycle,
    pub super_admin: Principal,
}

impl TestContext {
    pub fn new(records: impl IntoIterator<Item = VendorRecord>) -> Self {
        let store = Arc::new(MemoryVendorStore::with_vendors(records));
        Self {
            lifecycle: VendorLifecycle::new(store.clone()),
            store,
            super_admin: Principal::super_admin(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_respect_request_invariants() {
        for record in [vendor(1), pending_deactivation(2, 5), pending_activation(3, 5)] {
            assert_eq!(
                record.deactivation_status.is_pending(),
                record.deactivation_requested_by.is_some()
                    && record.deactivation_requested_at.is_some()
            );
        }
        assert!(!pending_activation(3, 5).is_active);
    }

    #[tokio::test]
    async fn context_seeds_store() {
        let ctx = TestContext::new([vendor(1), vendor(2)]);
        assert_eq!(ctx.store.len().await, 2);
        let record = ctx
            .lifecycle
            .vendor(VendorId::new(2).unwrap(), &ctx.super_admin)
            .await
            .unwrap();
        assert_eq!(record.email, "vendor2@example.com");
    }
}
