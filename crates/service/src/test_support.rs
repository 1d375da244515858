#![cfg(test)]
use configs::DatabaseConfig;

use crate::store::Store;

/// A single-connection in-memory SQLite config; every pool connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub fn memory_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    }
}

/// Fresh, not yet connected store backed by its own in-memory database.
pub fn memory_store() -> Store {
    Store::lazy(memory_config())
}
