use async_trait::async_trait;
use thiserror::Error;

use super::record::{VendorId, VendorPatch, VendorRecord};
use super::status::UnknownStatus;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the id together with the update guard
    #[error("Vendor {0} not found")]
    NotFound(VendorId),

    #[error("Vendor {id} is at version {actual}, expected {expected}")]
    VersionConflict { id: VendorId, expected: i64, actual: i64 },

    #[error(transparent)]
    InvalidStatus(#[from] UnknownStatus),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence boundary for vendor records.
///
/// `update` must apply the patch as one atomic operation: either the guard
/// holds and every field changes, or nothing changes.
#[async_trait]
pub trait VendorStore: Send + Sync {
    async fn get(&self, id: VendorId) -> Result<Option<VendorRecord>, StoreError>;

    async fn update(&self, id: VendorId, patch: &VendorPatch) -> Result<VendorRecord, StoreError>;

    /// Records in a pending status with a requester, in id order
    async fn list_pending(&self) -> Result<Vec<VendorRecord>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
