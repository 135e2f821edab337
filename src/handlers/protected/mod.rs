// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Security Level: JWT Authentication Required
// Route Prefix: /api/vendors/:id/*/request
// Middleware: jwt_auth_middleware injects the caller's Principal

pub mod vendor; // Vendor-initiated deactivation/reactivation requests

pub use vendor::*;
