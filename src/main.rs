use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use vendor_backoffice::config::config;
use vendor_backoffice::database::{DatabaseManager, PgVendorStore};
use vendor_backoffice::lifecycle::VendorLifecycle;
use vendor_backoffice::server::app;
use vendor_backoffice::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config();
    tracing::info!("Starting vendor back-office in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        if vendor_backoffice::is_production!() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        tracing::warn!("JWT_SECRET is not set; every authenticated request will be refused");
    }

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to open database pool")?;

    let lifecycle = VendorLifecycle::new(Arc::new(PgVendorStore::new(pool.clone())))
        .with_consistency(config.lifecycle.consistency)
        .with_audit_logging(config.security.enable_audit_logging);
    tracing::info!("Vendor updates use {:?} consistency", lifecycle.consistency());

    let state = AppState::new(lifecycle, config.security.jwt_secret.clone());
    let router = app(state, config);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Vendor back-office listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    DatabaseManager::close(pool).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
