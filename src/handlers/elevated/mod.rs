// handlers/elevated/mod.rs - Elevated handlers (super_admin role required)
//
// Security Level: JWT Authentication + super_admin role
// Route Prefix: /api/vendors/* and the legacy /api/auth/vendors/*
// Middleware: jwt_auth_middleware. Role enforcement happens in VendorLifecycle.

pub mod vendor; // Review queue, approvals, rejections and reset

pub use vendor::*;

/*
ELEVATED HANDLER ARCHITECTURE:

Security Flow:
1. Admin logs in through the shared login service → JWT with { id, role }
2. jwt_auth_middleware validates the token and injects a Principal
3. Handler forwards the Principal to VendorLifecycle
4. VendorLifecycle rejects non super_admin roles before reading any vendor (403)

Every successful transition is written to the `audit` tracing target when
SECURITY_ENABLE_AUDIT_LOGGING is on.
*/
