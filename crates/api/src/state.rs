use std::sync::Arc;

use agencyhub_db::store::PgProjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted and config sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: agencyhub_db::DbPool,
    /// Server configuration (JWT secret, timeouts, CORS).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Project store over this state's pool, for the proposal workflow.
    pub fn project_store(&self) -> PgProjectStore {
        PgProjectStore::new(self.pool.clone())
    }
}
