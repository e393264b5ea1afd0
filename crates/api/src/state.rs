use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the pool is created once at startup and dropped at
/// process shutdown.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sawmill_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
