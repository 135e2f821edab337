use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deactivation lifecycle state stored in `vendors.deactivation_status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeactivationStatus {
    Active,
    PendingDeactivation,
    PendingActivation,
    Deactivated,
    Activated,
}

impl DeactivationStatus {
    pub const ALL: [DeactivationStatus; 5] = [
        DeactivationStatus::Active,
        DeactivationStatus::PendingDeactivation,
        DeactivationStatus::PendingActivation,
        DeactivationStatus::Deactivated,
        DeactivationStatus::Activated,
    ];

    /// Column value as persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            DeactivationStatus::Active => "active",
            DeactivationStatus::PendingDeactivation => "pending_deactivation",
            DeactivationStatus::PendingActivation => "pending_activation",
            DeactivationStatus::Deactivated => "deactivated",
            DeactivationStatus::Activated => "activated",
        }
    }

    /// Awaiting a super-admin resolution
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            DeactivationStatus::PendingDeactivation | DeactivationStatus::PendingActivation
        )
    }
}

impl fmt::Display for DeactivationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized deactivation status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for DeactivationStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DeactivationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}
