pub mod agency;
pub mod health;
pub mod project;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /agencies                                  list, create
/// /agencies/{id}/members                     list members
/// /agencies/{id}/join-requests               request to join (POST)
///
/// /user/memberships                          caller's memberships, grouped
///
/// /projects                                  list, submit brief
/// /projects/stats                            dashboard counters
/// /projects/{id}                             get
/// /projects/{id}/proposal                    offered actions
/// /projects/{id}/proposal/actions            perform action (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/agencies", agency::router())
        .nest("/user", user::router())
        .nest("/projects", project::router())
}
