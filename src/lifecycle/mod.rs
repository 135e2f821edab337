// Vendor deactivation/reactivation lifecycle
//
// The state machine, its authorization guard and the store boundary it writes through.
// Nothing in here knows about HTTP or PostgreSQL.

pub mod error;
pub mod manager;
pub mod memory;
pub mod principal;
pub mod record;
pub mod status;
pub mod store;
pub mod transition;

pub use error::LifecycleError;
pub use manager::{ensure_super_admin, Consistency, VendorLifecycle};
pub use memory::MemoryVendorStore;
pub use principal::{Principal, Role};
pub use record::{PendingRequests, RequestStamp, UpdateGuard, VendorId, VendorPatch, VendorRecord};
pub use status::DeactivationStatus;
pub use store::{StoreError, VendorStore};
pub use transition::Transition;
