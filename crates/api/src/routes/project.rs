//! Route definitions for the `/projects` resource, including each
//! project's proposal.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, proposal};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /stats                         -> stats
/// GET    /{id}                          -> get_by_id
/// GET    /{id}/proposal                 -> get_options
/// POST   /{id}/proposal/actions         -> perform_action
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/stats", get(project::stats))
        .route("/{id}", get(project::get_by_id))
        .route("/{id}/proposal", get(proposal::get_options))
        .route("/{id}/proposal/actions", post(proposal::perform_action))
}
