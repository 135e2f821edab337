use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LifecycleError;
use super::status::DeactivationStatus;

/// Vendor primary key (`vendors.id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(i64);

impl VendorId {
    pub fn new(id: i64) -> Result<Self, LifecycleError> {
        if id <= 0 {
            return Err(LifecycleError::InvalidInput(format!(
                "Vendor id must be a positive integer, got {}",
                id
            )));
        }
        Ok(Self(id))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl FromStr for VendorId {
    type Err = LifecycleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let id = value.trim().parse::<i64>().map_err(|_| {
            LifecycleError::InvalidInput(format!("Invalid vendor id '{}'", value))
        })?;
        Self::new(id)
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One vendor account and its activation lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub id: VendorId,
    pub name: String,
    pub company_name: String,
    pub contact_number: String,
    pub email: String,
    pub is_active: bool,
    pub deactivation_status: DeactivationStatus,
    pub deactivation_requested_by: Option<i64>,
    pub deactivation_requested_at: Option<DateTime<Utc>>,
    pub deactivation_resolved_by: Option<i64>,
    pub deactivation_resolved_at: Option<DateTime<Utc>>,
    pub version: i64,
    pub updated_at: DateTime<Utc>,
}

impl VendorRecord {
    /// A freshly registered vendor: active, no request history
    pub fn registered(
        id: VendorId,
        name: impl Into<String>,
        company_name: impl Into<String>,
        contact_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            company_name: company_name.into(),
            contact_number: contact_number.into(),
            email: email.into(),
            is_active: true,
            deactivation_status: DeactivationStatus::Active,
            deactivation_requested_by: None,
            deactivation_requested_at: None,
            deactivation_resolved_by: None,
            deactivation_resolved_at: None,
            version: 0,
            updated_at: Utc::now(),
        }
    }

    /// Whether the record belongs in the pending-requests listing
    pub fn has_open_request(&self) -> bool {
        self.deactivation_status.is_pending() && self.deactivation_requested_by.is_some()
    }
}

/// What an update does to the requester fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStamp {
    Keep,
    Set { by: i64, at: DateTime<Utc> },
    Clear,
}

/// Conditions that must hold at write time for an update to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateGuard {
    pub status: Option<DeactivationStatus>,
    pub is_active: Option<bool>,
    pub version: Option<i64>,
}

impl UpdateGuard {
    /// Matches everything except the version check, which is reported separately
    pub fn admits(&self, record: &VendorRecord) -> bool {
        self.status.map_or(true, |s| record.deactivation_status == s)
            && self.is_active.map_or(true, |a| record.is_active == a)
    }
}

/// Partial update applied to one vendor record in a single atomic write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorPatch {
    pub status: DeactivationStatus,
    pub is_active: Option<bool>,
    pub requested: RequestStamp,
    pub resolved: Option<(i64, DateTime<Utc>)>,
    pub guard: UpdateGuard,
    pub at: DateTime<Utc>,
}

impl VendorPatch {
    pub fn expecting_version(mut self, version: i64) -> Self {
        self.guard.version = Some(version);
        self
    }

    /// Apply the field changes. Guards are the store's responsibility.
    pub fn apply_to(&self, record: &mut VendorRecord) {
        record.deactivation_status = self.status;
        if let Some(active) = self.is_active {
            record.is_active = active;
        }
        match self.requested {
            RequestStamp::Keep => {}
            RequestStamp::Set { by, at } => {
                record.deactivation_requested_by = Some(by);
                record.deactivation_requested_at = Some(at);
            }
            RequestStamp::Clear => {
                record.deactivation_requested_by = None;
                record.deactivation_requested_at = None;
            }
        }
        if let Some((by, at)) = self.resolved {
            record.deactivation_resolved_by = Some(by);
            record.deactivation_resolved_at = Some(at);
        }
        record.version += 1;
        record.updated_at = self.at;
    }
}

/// Open requests partitioned by kind, in store order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequests {
    pub deactivation_requests: Vec<VendorRecord>,
    pub reactivation_requests: Vec<VendorRecord>,
}

impl PendingRequests {
    pub fn partition(records: impl IntoIterator<Item = VendorRecord>) -> Self {
        let mut pending = Self::default();
        for record in records.into_iter().filter(VendorRecord::has_open_request) {
            match record.deactivation_status {
                DeactivationStatus::PendingDeactivation => pending.deactivation_requests.push(record),
                DeactivationStatus::PendingActivation => pending.reactivation_requests.push(record),
                DeactivationStatus::Active
                | DeactivationStatus::Deactivated
                | DeactivationStatus::Activated => {}
            }
        }
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: i64) -> VendorRecord {
        VendorRecord::registered(
            VendorId::new(id).unwrap(),
            "Ada",
            "Ada Supplies",
            "+1 555 0100",
            "ada@example.com",
        )
    }

    #[test]
    fn vendor_id_rejects_malformed_input() {
        assert_eq!("42".parse::<VendorId>().unwrap().get(), 42);
        assert!(matches!("abc".parse::<VendorId>(), Err(LifecycleError::InvalidInput(_))));
        assert!(matches!("0".parse::<VendorId>(), Err(LifecycleError::InvalidInput(_))));
        assert!(matches!("-3".parse::<VendorId>(), Err(LifecycleError::InvalidInput(_))));
    }

    #[test]
    fn registered_vendor_starts_active_without_history() {
        let record = vendor(1);
        assert!(record.is_active);
        assert_eq!(record.deactivation_status, DeactivationStatus::Active);
        assert!(record.deactivation_requested_by.is_none());
        assert!(record.deactivation_requested_at.is_none());
        assert!(!record.has_open_request());
    }

    #[test]
    fn patch_clears_requester_and_bumps_version() {
        let now = Utc::now();
        let mut record = vendor(1);
        record.deactivation_status = DeactivationStatus::PendingDeactivation;
        record.deactivation_requested_by = Some(3);
        record.deactivation_requested_at = Some(now);

        let patch = VendorPatch {
            status: DeactivationStatus::Active,
            is_active: Some(true),
            requested: RequestStamp::Clear,
            resolved: Some((9, now)),
            guard: UpdateGuard::default(),
            at: now,
        };
        patch.apply_to(&mut record);

        assert_eq!(record.deactivation_status, DeactivationStatus::Active);
        assert_eq!(record.deactivation_requested_by, None);
        assert_eq!(record.deactivation_requested_at, None);
        assert_eq!(record.deactivation_resolved_by, Some(9));
        assert_eq!(record.version, 1);
    }

    #[test]
    fn partition_skips_pending_rows_without_requester() {
        let mut orphan = vendor(2);
        orphan.deactivation_status = DeactivationStatus::PendingActivation;

        let mut filed = vendor(3);
        filed.deactivation_status = DeactivationStatus::PendingActivation;
        filed.deactivation_requested_by = Some(5);
        filed.deactivation_requested_at = Some(Utc::now());

        let pending = PendingRequests::partition(vec![vendor(1), orphan, filed.clone()]);
        assert!(pending.deactivation_requests.is_empty());
        assert_eq!(pending.reactivation_requests, vec![filed]);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(vendor(4)).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["companyName"], "Ada Supplies");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["deactivationStatus"], "active");
        assert!(json["deactivationRequestedBy"].is_null());
    }
}
