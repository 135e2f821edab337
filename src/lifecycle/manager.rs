use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::LifecycleError;
use super::principal::Principal;
use super::record::{PendingRequests, VendorId, VendorRecord};
use super::store::{StoreError, VendorStore};
use super::transition::Transition;

/// How concurrent writes to the same vendor are reconciled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consistency {
    /// The last update to arrive wins. No version check.
    #[default]
    LastWriteWins,
    /// Updates compare-and-swap on the record version read just before the write
    Versioned,
}

impl Consistency {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "last_write_wins" | "lww" => Some(Consistency::LastWriteWins),
            "versioned" | "cas" => Some(Consistency::Versioned),
            _ => None,
        }
    }
}

/// The single authorization check every privileged operation goes through
pub fn ensure_super_admin(principal: &Principal, action: &str) -> Result<(), LifecycleError> {
    if principal.is_super_admin() {
        return Ok(());
    }
    tracing::warn!(
        "Principal {} with role '{}' denied: {}",
        principal.id,
        principal.role,
        action
    );
    Err(LifecycleError::Unauthorized(format!(
        "Only super admins can {}",
        action
    )))
}

/// Owns the vendor deactivation/reactivation state machine
pub struct VendorLifecycle {
    store: Arc<dyn VendorStore>,
    consistency: Consistency,
    audit_logging: bool,
}

impl VendorLifecycle {
    pub fn new(store: Arc<dyn VendorStore>) -> Self {
        Self {
            store,
            consistency: Consistency::default(),
            audit_logging: false,
        }
    }

    pub fn with_consistency(mut self, consistency: Consistency) -> Self {
        self.consistency = consistency;
        self
    }

    pub fn with_audit_logging(mut self, enabled: bool) -> Self {
        self.audit_logging = enabled;
        self
    }

    pub fn consistency(&self) -> Consistency {
        self.consistency
    }

    pub async fn request_deactivation(
        &self,
        id: VendorId,
        principal: &Principal,
    ) -> Result<VendorRecord, LifecycleError> {
        self.apply(id, Transition::RequestDeactivation, principal).await
    }

    pub async fn request_reactivation(
        &self,
        id: VendorId,
        principal: &Principal,
    ) -> Result<VendorRecord, LifecycleError> {
        self.apply(id, Transition::RequestReactivation, principal).await
    }

    pub async fn approve_deactivation(
        &self,
        id: VendorId,
        principal: &Principal,
    ) -> Result<VendorRecord, LifecycleError> {
        self.apply(id, Transition::ApproveDeactivation, principal).await
    }

    pub async fn reject_deactivation(
        &self,
        id: VendorId,
        principal: &Principal,
    ) -> Result<VendorRecord, LifecycleError> {
        self.apply(id, Transition::RejectDeactivation, principal).await
    }

    pub async fn approve_reactivation(
        &self,
        id: VendorId,
        principal: &Principal,
    ) -> Result<VendorRecord, LifecycleError> {
        self.apply(id, Transition::ApproveReactivation, principal).await
    }

    pub async fn reject_reactivation(
        &self,
        id: VendorId,
        principal: &Principal,
    ) -> Result<VendorRecord, LifecycleError> {
        self.apply(id, Transition::RejectReactivation, principal).await
    }

    pub async fn reset_status(
        &self,
        id: VendorId,
        principal: &Principal,
    ) -> Result<VendorRecord, LifecycleError> {
        self.apply(id, Transition::Reset, principal).await
    }

    /// Open deactivation and reactivation requests, each in store order
    pub async fn list_pending_requests(
        &self,
        principal: &Principal,
    ) -> Result<PendingRequests, LifecycleError> {
        ensure_super_admin(principal, "view deactivation/reactivation requests")?;

        let records = self.store.list_pending().await.map_err(LifecycleError::Storage)?;
        let pending = PendingRequests::partition(records);
        tracing::debug!(
            "Fetched {} deactivation and {} reactivation requests",
            pending.deactivation_requests.len(),
            pending.reactivation_requests.len()
        );
        Ok(pending)
    }

    pub async fn vendor(
        &self,
        id: VendorId,
        principal: &Principal,
    ) -> Result<VendorRecord, LifecycleError> {
        ensure_super_admin(principal, "view vendors")?;

        self.store
            .get(id)
            .await
            .map_err(LifecycleError::Storage)?
            .ok_or_else(|| LifecycleError::NotFound("Vendor not found".to_string()))
    }

    /// Run `transition` against a vendor named by an unparsed id, such as a URL
    /// path segment. Authorization is checked before the id is parsed so that an
    /// unprivileged caller learns nothing from a malformed id.
    pub async fn transition_by_raw_id(
        &self,
        raw_id: &str,
        transition: Transition,
        principal: &Principal,
    ) -> Result<VendorRecord, LifecycleError> {
        if transition.requires_super_admin() {
            ensure_super_admin(principal, transition.action())?;
        }
        let id = raw_id.parse::<VendorId>()?;
        self.apply(id, transition, principal).await
    }

    /// `vendor` for an unparsed id, authorizing first
    pub async fn vendor_by_raw_id(
        &self,
        raw_id: &str,
        principal: &Principal,
    ) -> Result<VendorRecord, LifecycleError> {
        ensure_super_admin(principal, "view vendors")?;
        let id = raw_id.parse::<VendorId>()?;
        self.vendor(id, principal).await
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    /// Authorize, check preconditions that need a read, then perform one conditional write
    async fn apply(
        &self,
        id: VendorId,
        transition: Transition,
        principal: &Principal,
    ) -> Result<VendorRecord, LifecycleError> {
        if transition.requires_super_admin() {
            ensure_super_admin(principal, transition.action())?;
        }

        let mut patch = transition.patch(principal.id, Utc::now());

        let versioned = self.consistency == Consistency::Versioned;
        if versioned || transition.required_activity().is_some() {
            let current = self
                .store
                .get(id)
                .await
                .map_err(LifecycleError::Storage)?
                .ok_or_else(|| LifecycleError::NotFound(transition.not_found_message().to_string()))?;

            if let Some(required) = transition.required_activity() {
                if current.is_active != required {
                    return Err(LifecycleError::InvalidState(format!(
                        "Vendor {} is {}; cannot {}",
                        id,
                        if current.is_active { "active" } else { "inactive" },
                        transition.action()
                    )));
                }
            }
            if versioned {
                patch = patch.expecting_version(current.version);
            }
        }

        let updated = self
            .store
            .update(id, &patch)
            .await
            .map_err(|err| match err {
                StoreError::NotFound(_) => {
                    LifecycleError::NotFound(transition.not_found_message().to_string())
                }
                StoreError::VersionConflict { id, expected, .. } => LifecycleError::VersionConflict {
                    id: id.get(),
                    expected,
                },
                other => {
                    tracing::error!("Failed to {} for vendor {}: {}", transition.action(), id, other);
                    LifecycleError::Storage(other)
                }
            })?;

        if self.audit_logging {
            tracing::info!(
                target: "audit",
                vendor_id = id.get(),
                actor = principal.id,
                transition = ?transition,
                status = %updated.deactivation_status,
                "vendor lifecycle transition"
            );
        }

        Ok(updated)
    }
}
