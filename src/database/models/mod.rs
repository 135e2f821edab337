pub mod vendor;

pub use vendor::{VendorRow, VENDOR_COLUMNS};
