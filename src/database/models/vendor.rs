use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::lifecycle::{DeactivationStatus, StoreError, VendorId, VendorRecord};

/// Raw `vendors` row. The status column is free text in the database and is
/// only trusted once it parses into a `DeactivationStatus`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VendorRow {
    pub id: i64,
    pub name: String,
    pub company_name: String,
    pub contact_number: String,
    pub email: String,
    pub is_active: bool,
    pub deactivation_status: String,
    pub deactivation_requested_by: Option<i64>,
    pub deactivation_requested_at: Option<DateTime<Utc>>,
    pub deactivation_resolved_by: Option<i64>,
    pub deactivation_resolved_at: Option<DateTime<Utc>>,
    pub version: i64,
    pub updated_at: DateTime<Utc>,
}

/// Column list shared by every query that returns a full vendor
pub const VENDOR_COLUMNS: &str = r#"
    id, name, company_name, contact_number, email, is_active,
    deactivation_status,
    deactivation_requested_by, deactivation_requested_at,
    deactivation_resolved_by, deactivation_resolved_at,
    version, updated_at
"#;

impl TryFrom<VendorRow> for VendorRecord {
    type Error = StoreError;

    fn try_from(row: VendorRow) -> Result<Self, Self::Error> {
        let deactivation_status = row.deactivation_status.parse::<DeactivationStatus>()?;
        let id = VendorId::new(row.id)
            .map_err(|e| StoreError::Unavailable(format!("corrupt vendor row: {}", e)))?;

        Ok(VendorRecord {
            id,
            name: row.name,
            company_name: row.company_name,
            contact_number: row.contact_number,
            email: row.email,
            is_active: row.is_active,
            deactivation_status,
            deactivation_requested_by: row.deactivation_requested_by,
            deactivation_requested_at: row.deactivation_requested_at,
            deactivation_resolved_by: row.deactivation_resolved_by,
            deactivation_resolved_at: row.deactivation_resolved_at,
            version: row.version,
            updated_at: row.updated_at,
        })
    }
}
