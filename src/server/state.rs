//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources cloned into each handler through Axum's state extraction.
///
/// `DatabaseConnection` is a pool handle, so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for tiers, overrides, users and orders.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
