use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::record::{VendorId, VendorPatch, VendorRecord};
use super::store::{StoreError, VendorStore};

/// In-process vendor store. Rows are kept in id order; every update runs
/// under the write lock so it is atomic with respect to other callers.
#[derive(Debug, Default)]
pub struct MemoryVendorStore {
    vendors: RwLock<BTreeMap<VendorId, VendorRecord>>,
}

impl MemoryVendorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vendors(records: impl IntoIterator<Item = VendorRecord>) -> Self {
        let vendors = records.into_iter().map(|r| (r.id, r)).collect();
        Self {
            vendors: RwLock::new(vendors),
        }
    }

    /// Insert or replace a record as-is (registration and fixtures)
    pub async fn insert(&self, record: VendorRecord) {
        self.vendors.write().await.insert(record.id, record);
    }

    pub async fn len(&self) -> usize {
        self.vendors.read().await.len()
    }
}

#[async_trait]
impl VendorStore for MemoryVendorStore {
    async fn get(&self, id: VendorId) -> Result<Option<VendorRecord>, StoreError> {
        Ok(self.vendors.read().await.get(&id).cloned())
    }

    async fn update(&self, id: VendorId, patch: &VendorPatch) -> Result<VendorRecord, StoreError> {
        let mut vendors = self.vendors.write().await;
        let record = vendors.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if let Some(expected) = patch.guard.version {
            if record.version != expected {
                return Err(StoreError::VersionConflict {
                    id,
                    expected,
                    actual: record.version,
                });
            }
        }
        if !patch.guard.admits(record) {
            return Err(StoreError::NotFound(id));
        }

        patch.apply_to(record);
        Ok(record.clone())
    }

    async fn list_pending(&self) -> Result<Vec<VendorRecord>, StoreError> {
        Ok(self
            .vendors
            .read()
            .await
            .values()
            .filter(|r| r.has_open_request())
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
