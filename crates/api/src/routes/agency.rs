//! Route definitions for the `/agencies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::agency;
use crate::state::AppState;

/// Routes mounted at `/agencies`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}/members           -> list_members
/// POST   /{id}/join-requests     -> request_to_join
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(agency::list).post(agency::create))
        .route("/{id}/members", get(agency::list_members))
        .route("/{id}/join-requests", post(agency::request_to_join))
}
