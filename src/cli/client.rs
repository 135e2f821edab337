use std::time::Duration;

use anyhow::{anyhow, Context};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

/// Thin HTTP client for the back-office API envelope
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
            http,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Call an authenticated endpoint and return the `data` member of the success envelope
    pub async fn call(&self, method: Method, path: &str) -> anyhow::Result<Value> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| anyhow!("No token provided. Pass --token or set BACKOFFICE_TOKEN"))?;

        let response = self
            .http
            .request(method, self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.base_url))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("server answered {} without a JSON body", status))?;

        unwrap_envelope(status, body)
    }

    /// GET /health. Returns the raw body with the status so degraded servers still report.
    pub async fn health(&self) -> anyhow::Result<(StatusCode, Value)> {
        let response = self
            .http
            .get(self.url("/health"))
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.base_url))?;

        let status = response.status();
        let body = response.json().await.unwrap_or(Value::Null);
        Ok((status, body))
    }
}

fn unwrap_envelope(status: StatusCode, mut body: Value) -> anyhow::Result<Value> {
    if status.is_success() && body["success"] == true {
        return Ok(body["data"].take());
    }

    let message = body["message"].as_str().unwrap_or("request failed");
    match body["code"].as_str() {
        Some(code) => Err(anyhow!("{} ({}, HTTP {})", message, code, status.as_u16())),
        None => Err(anyhow!("{} (HTTP {})", message, status.as_u16())),
    }
}
