// handlers/mod.rs - 3-Tier Handler Architecture
//
// Public (no auth) → Protected (JWT auth) → Elevated (JWT auth + super_admin role)
//
// The elevated tier shares the protected JWT layer. The super_admin check itself
// lives in the lifecycle core so that every entry point goes through it. Handlers
// pass the raw `:id` segment through; it is parsed only after authorization.
pub mod public;    // Tier 1: No authentication required (/, /health)
pub mod protected; // Tier 2: JWT authentication required (vendor self-service requests)
pub mod elevated;  // Tier 3: super_admin role required (review and reset)

/*
DIRECTORY LAYOUT:

src/
├── handlers/
│   ├── mod.rs              ← This file
│   ├── public/
│   │   ├── root.rs         ← GET /
│   │   └── health.rs       ← GET /health
│   ├── protected/
│   │   └── vendor/
│   │       ├── request_deactivation.rs  ← POST /api/vendors/:id/deactivation/request
│   │       └── request_reactivation.rs  ← POST /api/vendors/:id/reactivation/request
│   └── elevated/
│       └── vendor/
│           ├── list.rs          ← GET /api/vendors/requests
│           ├── show.rs          ← GET /api/vendors/:id
│           ├── deactivation.rs  ← PUT /api/vendors/:id/deactivation/{approve,reject}
│           ├── reactivation.rs  ← POST /api/vendors/:id/reactivation/{approve,reject}
│           └── reset.rs         ← PUT /api/vendors/:id/reset
│
└── server.rs              ← Routes assembled from handlers::*
*/
