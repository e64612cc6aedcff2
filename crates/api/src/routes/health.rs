use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness and database reachability, served at the root as `/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` while the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn from_db_check(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match agencyhub_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };
    Json(HealthResponse::from_db_check(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
