use async_trait::async_trait;
use once_cell::sync::Lazy;
use sqlx::PgPool;

use crate::database::models::{VendorRow, VENDOR_COLUMNS};
use crate::lifecycle::{
    RequestStamp, StoreError, VendorId, VendorPatch, VendorRecord, VendorStore,
};

static SELECT_ONE: Lazy<String> =
    Lazy::new(|| format!("SELECT {} FROM vendors WHERE id = $1", VENDOR_COLUMNS));

static SELECT_PENDING: Lazy<String> = Lazy::new(|| {
    format!(
        r#"
        SELECT {}
        FROM vendors
        WHERE deactivation_status IN ('pending_deactivation', 'pending_activation')
          AND deactivation_requested_by IS NOT NULL
        ORDER BY id
        "#,
        VENDOR_COLUMNS
    )
});

// One statement per transition: the guard is part of the predicate so the
// check and the write cannot be separated by another writer.
static UPDATE_GUARDED: Lazy<String> = Lazy::new(|| {
    format!(
        r#"
        UPDATE vendors
        SET deactivation_status = $2,
            is_active = COALESCE($3::boolean, is_active),
            deactivation_requested_by = CASE $4::text
                WHEN 'set' THEN $5::bigint
                WHEN 'clear' THEN NULL
                ELSE deactivation_requested_by END,
            deactivation_requested_at = CASE $4::text
                WHEN 'set' THEN $6::timestamptz
                WHEN 'clear' THEN NULL
                ELSE deactivation_requested_at END,
            deactivation_resolved_by = COALESCE($7::bigint, deactivation_resolved_by),
            deactivation_resolved_at = COALESCE($8::timestamptz, deactivation_resolved_at),
            version = version + 1,
            updated_at = $9
        WHERE id = $1
          AND ($10::text IS NULL OR deactivation_status = $10::text)
          AND ($11::boolean IS NULL OR is_active = $11::boolean)
          AND ($12::bigint IS NULL OR version = $12::bigint)
        RETURNING {}
        "#,
        VENDOR_COLUMNS
    )
});

/// Vendor store backed by the `vendors` table
#[derive(Clone)]
pub struct PgVendorStore {
    pool: PgPool,
}

impl PgVendorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Distinguish "someone else wrote first" from "no such vendor / guard failed"
    async fn explain_miss(&self, id: VendorId, patch: &VendorPatch) -> StoreError {
        let Some(expected) = patch.guard.version else {
            return StoreError::NotFound(id);
        };

        let current: Result<Option<(i64,)>, sqlx::Error> =
            sqlx::query_as("SELECT version FROM vendors WHERE id = $1")
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await;

        match current {
            Ok(Some((actual,))) if actual != expected => StoreError::VersionConflict {
                id,
                expected,
                actual,
            },
            Ok(_) => StoreError::NotFound(id),
            Err(e) => from_sqlx(e),
        }
    }
}

fn from_sqlx(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(err.to_string())
        }
        other => StoreError::Sqlx(other),
    }
}

#[async_trait]
impl VendorStore for PgVendorStore {
    async fn get(&self, id: VendorId) -> Result<Option<VendorRecord>, StoreError> {
        let row = sqlx::query_as::<_, VendorRow>(&SELECT_ONE)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(from_sqlx)?;

        row.map(VendorRecord::try_from).transpose()
    }

    async fn update(&self, id: VendorId, patch: &VendorPatch) -> Result<VendorRecord, StoreError> {
        let (mode, requested_by, requested_at) = match patch.requested {
            RequestStamp::Keep => ("keep", None, None),
            RequestStamp::Set { by, at } => ("set", Some(by), Some(at)),
            RequestStamp::Clear => ("clear", None, None),
        };
        let (resolved_by, resolved_at) = match patch.resolved {
            Some((by, at)) => (Some(by), Some(at)),
            None => (None, None),
        };

        let row = sqlx::query_as::<_, VendorRow>(&UPDATE_GUARDED)
            .bind(id.get())
            .bind(patch.status.as_str())
            .bind(patch.is_active)
            .bind(mode)
            .bind(requested_by)
            .bind(requested_at)
            .bind(resolved_by)
            .bind(resolved_at)
            .bind(patch.at)
            .bind(patch.guard.status.map(|s| s.as_str()))
            .bind(patch.guard.is_active)
            .bind(patch.guard.version)
            .fetch_optional(&self.pool)
            .await
            .map_err(from_sqlx)?;

        match row {
            Some(row) => VendorRecord::try_from(row),
            None => Err(self.explain_miss(id, patch).await),
        }
    }

    async fn list_pending(&self) -> Result<Vec<VendorRecord>, StoreError> {
        let rows = sqlx::query_as::<_, VendorRow>(&SELECT_PENDING)
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx)?;

        rows.into_iter().map(VendorRecord::try_from).collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(from_sqlx)?;
        Ok(())
    }
}
