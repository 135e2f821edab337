// handlers/public/root.rs - GET / handler

use axum::response::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Vendor Back-office API",
            "version": version,
            "description": "Vendor deactivation and reactivation review",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "requests": "/api/vendors/:id/{deactivation,reactivation}/request (protected)",
                "review": "/api/vendors/requests, /api/vendors/:id/{deactivation,reactivation}/{approve,reject} (super_admin)",
                "reset": "/api/vendors/:id/reset (super_admin)",
                "legacy": "/api/auth/vendors/* (super_admin)",
            }
        }
    }))
}
