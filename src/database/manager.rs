use sqlx::{postgres::PgPoolOptions, Executor, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Schema bootstrap failed: {0}")]
    Schema(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Schema for the tables this service owns
pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Connection pool construction and bootstrap for the back-office database
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open the pool described by `config`
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let url = config
            .url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(url)
            .await?;

        info!(
            "Created database pool (max_connections={}, timeout={}s)",
            config.max_connections, config.connection_timeout
        );

        if config.bootstrap_schema {
            Self::bootstrap_schema(&pool).await?;
        }

        Ok(pool)
    }

    /// Create missing tables and indexes. Idempotent.
    pub async fn bootstrap_schema(pool: &PgPool) -> Result<(), DatabaseError> {
        pool.execute(SCHEMA_SQL)
            .await
            .map_err(|e| DatabaseError::Schema(e.to_string()))?;
        info!("Database schema verified");
        Ok(())
    }

    /// Close the pool on shutdown
    pub async fn close(pool: PgPool) {
        pool.close().await;
        info!("Closed database pool");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_requires_a_url() {
        let config = DatabaseConfig {
            url: Some("   ".to_string()),
            max_connections: 1,
            connection_timeout: 1,
            bootstrap_schema: false,
        };
        let err = DatabaseManager::connect(&config).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ConfigMissing("DATABASE_URL")));
    }

    #[test]
    fn schema_is_idempotent() {
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS vendors"));
        assert!(!SCHEMA_SQL.contains("DROP "));
    }
}
