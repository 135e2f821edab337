pub mod manager;
pub mod models;
pub mod vendor_store;

pub use manager::{DatabaseError, DatabaseManager};
pub use vendor_store::PgVendorStore;
