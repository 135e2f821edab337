// handlers/public/mod.rs - Public handlers (no authentication)
//
// Service discovery and liveness. Nothing here touches vendor data.

pub mod health; // GET /health
pub mod root;   // GET /

pub use health::health;
pub use root::root;
