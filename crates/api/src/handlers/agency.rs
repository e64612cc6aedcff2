//! Handlers for the `/agencies` resource.

use agencyhub_core::error::CoreError;
use agencyhub_core::membership::{
    validate_agency_name, JOIN_REQUEST_PERMISSION, JOIN_REQUEST_STATUS, JOIN_REQUEST_USER_TYPE,
};
use agencyhub_core::types::DbId;
use agencyhub_db::models::agency::{Agency, AgencyMember, CreateAgency, CreateAgencyMember};
use agencyhub_db::repositories::{AgencyMemberRepo, AgencyRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::require_actor;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/agencies
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Agency>>>> {
    let agencies = AgencyRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: agencies }))
}

/// POST /api/v1/agencies
///
/// The caller becomes the agency's first admin.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateAgency>,
) -> AppResult<(StatusCode, Json<DataResponse<Agency>>)> {
    validate_agency_name(&input.name)?;

    let agency = AgencyRepo::create(&state.pool, &input, user.user_id).await?;
    tracing::info!(agency_id = agency.id, user_id = user.user_id, "Agency created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: agency })))
}

/// GET /api/v1/agencies/{id}/members
pub async fn list_members(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<AgencyMember>>>> {
    ensure_agency_exists(&state, id).await?;
    require_actor(&state, user.user_id, id).await?;

    let members = AgencyMemberRepo::list_for_agency(&state.pool, id).await?;
    Ok(Json(DataResponse { data: members }))
}

/// POST /api/v1/agencies/{id}/join-requests
///
/// Creates a pending client/viewer membership for the caller. A second
/// request for the same agency is a 409.
pub async fn request_to_join(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<AgencyMember>>)> {
    ensure_agency_exists(&state, id).await?;

    let input = CreateAgencyMember {
        agency_id: id,
        user_id: user.user_id,
        user_type: JOIN_REQUEST_USER_TYPE,
        permission_level: JOIN_REQUEST_PERMISSION,
        status: JOIN_REQUEST_STATUS,
        invited_by: None,
    };
    let member = AgencyMemberRepo::create(&state.pool, &input).await?;
    tracing::info!(agency_id = id, user_id = user.user_id, "Join request created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

async fn ensure_agency_exists(state: &AppState, id: DbId) -> AppResult<()> {
    AgencyRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Agency",
            id,
        }))
}
