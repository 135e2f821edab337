mod common;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use vendor_backoffice::lifecycle::{StoreError, VendorId, VendorPatch, VendorRecord, VendorStore};

struct DownStore;

#[async_trait]
impl VendorStore for DownStore {
    async fn get(&self, _id: VendorId) -> Result<Option<VendorRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn update(&self, _id: VendorId, _patch: &VendorPatch) -> Result<VendorRecord, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn list_pending(&self) -> Result<Vec<VendorRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

#[tokio::test]
async fn root_describes_the_service() -> Result<()> {
    let (server, _store) = common::TestServer::start(vec![]).await?;

    let (status, body) = server.call(Method::GET, "/", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Vendor Back-office API");
    Ok(())
}

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let (server, _store) = common::TestServer::start(vec![]).await?;

    let (status, body) = server.call(Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn unavailable_store_degrades_health_and_operations() -> Result<()> {
    let server = common::TestServer::start_with_store(Arc::new(DownStore)).await?;

    let (status, body) = server.call(Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["status"], "degraded");

    let token = common::super_admin_token()?;
    let (status, body) = server
        .call(Method::GET, "/api/vendors/requests", Some(&token))
        .await?;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
    assert!(!body["message"].as_str().unwrap_or_default().contains("refused"));
    Ok(())
}
