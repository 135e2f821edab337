#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration as StdDuration, Instant};

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use reqwest::{Method, StatusCode};
use serde_json::Value;

use vendor_backoffice::auth::{generate_jwt, Claims};
use vendor_backoffice::config::AppConfig;
use vendor_backoffice::lifecycle::{
    DeactivationStatus, MemoryVendorStore, VendorId, VendorLifecycle, VendorRecord, VendorStore,
};
use vendor_backoffice::server::app;
use vendor_backoffice::state::AppState;

pub const SECRET: &str = "integration-test-secret";
pub const SUPER_ADMIN: i64 = 1;

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    client: reqwest::Client,
}

impl TestServer {
    /// Serve the app over a seeded in-memory store
    pub async fn start(records: Vec<VendorRecord>) -> Result<(Self, Arc<MemoryVendorStore>)> {
        let store = Arc::new(MemoryVendorStore::with_vendors(records));
        let server = Self::start_with_store(store.clone()).await?;
        Ok((server, store))
    }

    pub async fn start_with_store(store: Arc<dyn VendorStore>) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut config = AppConfig::development();
        config.api.enable_request_logging = false;
        config.security.jwt_secret = SECRET.to_string();

        let state = AppState::new(
            VendorLifecycle::new(store).with_audit_logging(true),
            SECRET,
        );
        let router = app(state, &config);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind port {}", port))?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let server = Self {
            port,
            base_url,
            client: reqwest::Client::new(),
        };
        server.wait_ready(StdDuration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: StdDuration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = self.client.get(format!("{}/", self.base_url)).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(StdDuration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    /// Send a request and return status plus JSON body
    pub async fn call(&self, method: Method, path: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
        let mut request = self.client.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let res = request.send().await?;
        let status = res.status();
        let body = res.json::<Value>().await.unwrap_or(Value::Null);
        Ok((status, body))
    }
}

pub fn token(id: i64, role: &str) -> Result<String> {
    Ok(generate_jwt(&Claims::new(id, role, 1), SECRET)?)
}

pub fn super_admin_token() -> Result<String> {
    token(SUPER_ADMIN, "super_admin")
}

// Fixtures mirror src/testing/mod.rs, which is only compiled for unit tests.
// Keep the two in sync.

pub fn vendor(id: i64) -> VendorRecord {
    VendorRecord::registered(
        VendorId::new(id).expect("fixture ids are positive"),
        format!("Vendor {}", id),
        format!("Company {}", id),
        format!("+1 555 01{:02}", id % 100),
        format!("vendor{}@example.com", id),
    )
}

pub fn pending_deactivation(id: i64, requested_by: i64) -> VendorRecord {
    let mut record = vendor(id);
    record.deactivation_status = DeactivationStatus::PendingDeactivation;
    record.deactivation_requested_by = Some(requested_by);
    record.deactivation_requested_at = Some(Utc::now() - Duration::hours(1));
    record
}

pub fn pending_activation(id: i64, requested_by: i64) -> VendorRecord {
    let mut record = vendor(id);
    record.is_active = false;
    record.deactivation_status = DeactivationStatus::PendingActivation;
    record.deactivation_requested_by = Some(requested_by);
    record.deactivation_requested_at = Some(Utc::now() - Duration::hours(1));
    record
}

pub fn deactivated(id: i64) -> VendorRecord {
    let mut record = vendor(id);
    record.is_active = false;
    record.deactivation_status = DeactivationStatus::Deactivated;
    record
}
