use std::sync::Arc;

use crate::lifecycle::VendorLifecycle;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub lifecycle: Arc<VendorLifecycle>,
    pub jwt_secret: Arc<String>,
}

impl AppState {
    pub fn new(lifecycle: VendorLifecycle, jwt_secret: impl Into<String>) -> Self {
        Self {
            lifecycle: Arc::new(lifecycle),
            jwt_secret: Arc::new(jwt_secret.into()),
        }
    }
}
