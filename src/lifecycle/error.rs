use thiserror::Error;

use super::store::StoreError;

/// Failures surfaced by lifecycle operations. None of them leave a partial write behind.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Vendor {id} was modified concurrently (expected version {expected})")]
    VersionConflict { id: i64, expected: i64 },

    #[error("Storage failure: {0}")]
    Storage(#[source] StoreError),
}

impl LifecycleError {
    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            LifecycleError::Unauthorized(_) => "unauthorized",
            LifecycleError::NotFound(_) => "not_found",
            LifecycleError::InvalidInput(_) => "invalid_input",
            LifecycleError::InvalidState(_) => "invalid_state",
            LifecycleError::VersionConflict { .. } => "version_conflict",
            LifecycleError::Storage(_) => "storage_failure",
        }
    }
}
