//! Route definitions for the caller's own resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::membership;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET    /memberships            -> list_mine
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/memberships", get(membership::list_mine))
}
