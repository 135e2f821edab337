use chrono::{DateTime, Utc};
use serde::Serialize;

use super::record::{RequestStamp, UpdateGuard, VendorPatch};
use super::status::DeactivationStatus;

/// Every way the deactivation status can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    RequestDeactivation,
    RequestReactivation,
    ApproveDeactivation,
    RejectDeactivation,
    ApproveReactivation,
    RejectReactivation,
    Reset,
}

impl Transition {
    pub const ALL: [Transition; 7] = [
        Transition::RequestDeactivation,
        Transition::RequestReactivation,
        Transition::ApproveDeactivation,
        Transition::RejectDeactivation,
        Transition::ApproveReactivation,
        Transition::RejectReactivation,
        Transition::Reset,
    ];

    /// Filing a request is open to any authenticated principal; resolving one is not
    pub fn requires_super_admin(&self) -> bool {
        !matches!(
            self,
            Transition::RequestDeactivation | Transition::RequestReactivation
        )
    }

    /// Human description used in authorization and audit messages
    pub fn action(&self) -> &'static str {
        match self {
            Transition::RequestDeactivation => "request vendor deactivation",
            Transition::RequestReactivation => "request vendor reactivation",
            Transition::ApproveDeactivation => "approve vendor deactivation",
            Transition::RejectDeactivation => "reject vendor deactivation",
            Transition::ApproveReactivation => "approve vendor reactivation",
            Transition::RejectReactivation => "reject vendor reactivation",
            Transition::Reset => "reset vendor status",
        }
    }

    /// Message returned when the store matched no row
    pub fn not_found_message(&self) -> &'static str {
        match self {
            Transition::ApproveReactivation | Transition::RejectReactivation => {
                "Vendor not found or no reactivation requested"
            }
            Transition::RequestReactivation => "Vendor not found or already active",
            Transition::RequestDeactivation
            | Transition::ApproveDeactivation
            | Transition::RejectDeactivation
            | Transition::Reset => "Vendor not found",
        }
    }

    /// Status the vendor must be in for the write to apply.
    ///
    /// Only the reactivation pair is gated. Approving or rejecting a
    /// deactivation forces the status whatever it currently is.
    pub fn required_status(&self) -> Option<DeactivationStatus> {
        match self {
            Transition::ApproveReactivation | Transition::RejectReactivation => {
                Some(DeactivationStatus::PendingActivation)
            }
            Transition::RequestDeactivation
            | Transition::RequestReactivation
            | Transition::ApproveDeactivation
            | Transition::RejectDeactivation
            | Transition::Reset => None,
        }
    }

    /// Activation flag the vendor must currently have
    pub fn required_activity(&self) -> Option<bool> {
        match self {
            Transition::RequestReactivation => Some(false),
            Transition::RequestDeactivation
            | Transition::ApproveDeactivation
            | Transition::RejectDeactivation
            | Transition::ApproveReactivation
            | Transition::RejectReactivation
            | Transition::Reset => None,
        }
    }

    pub fn target_status(&self) -> DeactivationStatus {
        match self {
            Transition::RequestDeactivation => DeactivationStatus::PendingDeactivation,
            Transition::RequestReactivation => DeactivationStatus::PendingActivation,
            Transition::ApproveDeactivation => DeactivationStatus::Deactivated,
            Transition::RejectDeactivation => DeactivationStatus::Active,
            Transition::ApproveReactivation => DeactivationStatus::Activated,
            Transition::RejectReactivation => DeactivationStatus::Deactivated,
            Transition::Reset => DeactivationStatus::Active,
        }
    }

    /// Build the single atomic write for this transition performed by `actor` at `now`
    pub fn patch(&self, actor: i64, now: DateTime<Utc>) -> VendorPatch {
        let (is_active, requested, resolved) = match self {
            Transition::RequestDeactivation | Transition::RequestReactivation => {
                (None, RequestStamp::Set { by: actor, at: now }, None)
            }
            Transition::ApproveDeactivation => (Some(false), RequestStamp::Keep, Some((actor, now))),
            Transition::RejectDeactivation => (None, RequestStamp::Keep, Some((actor, now))),
            Transition::ApproveReactivation => (Some(true), RequestStamp::Keep, Some((actor, now))),
            Transition::RejectReactivation => (None, RequestStamp::Keep, Some((actor, now))),
            Transition::Reset => (Some(true), RequestStamp::Clear, Some((actor, now))),
        };

        VendorPatch {
            status: self.target_status(),
            is_active,
            requested,
            resolved,
            guard: UpdateGuard {
                status: self.required_status(),
                is_active: self.required_activity(),
                version: None,
            },
            at: now,
        }
    }
}
