use std::sync::Arc;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use tracing::{info, error};

use crate::errors::ServiceError;

/// Process-wide database handle, connected on first use.
///
/// The first caller pays for connecting and migrating; everyone after that
/// shares the same `DatabaseConnection` (itself a pool). A failed attempt
/// leaves the cell empty so the next request tries again.
#[derive(Clone)]
pub struct Store {
    cfg: Arc<DatabaseConfig>,
    conn: Arc<OnceCell<DatabaseConnection>>,
}

impl Store {
    pub fn lazy(cfg: DatabaseConfig) -> Self {
        Self { cfg: Arc::new(cfg), conn: Arc::new(OnceCell::new()) }
    }

    /// Wrap an already connected (and migrated) handle.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            cfg: Arc::new(DatabaseConfig::default()),
            conn: Arc::new(OnceCell::new_with(Some(db))),
        }
    }

    pub async fn db(&self) -> Result<&DatabaseConnection, ServiceError> {
        self.conn
            .get_or_try_init(|| async {
                info!(sqlite = self.cfg.is_sqlite(), "connecting to database");
                models::db::connect_and_migrate(&self.cfg).await.map_err(|e| {
                    error!(err = %e, "database initialization failed");
                    ServiceError::Db(e.to_string())
                })
            })
            .await
    }

    pub fn is_connected(&self) -> bool {
        self.conn.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connects_once_and_reuses_handle() -> Result<(), anyhow::Error> {
        let store = crate::test_support::memory_store();
        assert!(!store.is_connected());

        let first = store.db().await? as *const DatabaseConnection;
        assert!(store.is_connected());
        let second = store.clone().db().await? as *const DatabaseConnection;
        // clones share the cell, so the same handle comes back
        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn wrapped_connection_is_used_without_reconnecting() -> Result<(), anyhow::Error> {
        let db = models::db::connect_and_migrate(&crate::test_support::memory_config()).await?;
        let store = Store::from_connection(db);
        assert!(store.is_connected());

        let catalog = crate::catalog::CatalogService::new(store.clone());
        assert_eq!(catalog.list().await?.len(), 6);
        assert!(store.is_connected());
        Ok(())
    }

    #[tokio::test]
    async fn failed_connect_is_retried_later() {
        let store = Store::lazy(DatabaseConfig {
            url: "sqlite:///definitely/missing/dir/site.db".into(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_secs: 1,
            acquire_timeout_secs: 1,
            ..DatabaseConfig::default()
        });
        assert!(matches!(store.db().await, Err(ServiceError::Db(_))));
        assert!(!store.is_connected());
    }
}
