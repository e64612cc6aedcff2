//! Handlers for the caller's own memberships.

use agencyhub_db::models::agency::GroupedMemberships;
use agencyhub_db::repositories::AgencyMemberRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/user/memberships
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<GroupedMemberships>>> {
    let memberships = AgencyMemberRepo::list_for_user(&state.pool, user.user_id).await?;
    let grouped = GroupedMemberships::group(memberships)?;
    Ok(Json(DataResponse { data: grouped }))
}
