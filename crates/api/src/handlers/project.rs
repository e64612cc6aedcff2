//! Handlers for the `/projects` resource.

use agencyhub_core::error::CoreError;
use agencyhub_core::project_brief::ProjectBrief;
use agencyhub_core::project_stats::ProjectStats;
use agencyhub_core::proposal_status::ProjectStatus;
use agencyhub_core::types::DbId;
use agencyhub_db::models::project::Project;
use agencyhub_db::repositories::{AgencyRepo, ProjectRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::require_actor;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing projects and their stats.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub agency_id: Option<DbId>,
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_visible_to(&state.pool, user.user_id, params.agency_id).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/stats
pub async fn stats(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<DataResponse<ProjectStats>>> {
    let rows =
        ProjectRepo::count_visible_by_status(&state.pool, user.user_id, params.agency_id).await?;

    Ok(Json(DataResponse {
        data: stats_from_rows(rows)?,
    }))
}

/// Fold `(status, count)` rows from the database into dashboard counters.
fn stats_from_rows(rows: Vec<(String, i64)>) -> Result<ProjectStats, CoreError> {
    let counts = rows
        .into_iter()
        .map(|(status, n)| {
            let status = ProjectStatus::from_str_db(&status)
                .map_err(|e| CoreError::Internal(format!("Unreadable project status: {e}")))?;
            let n = u64::try_from(n).map_err(|_| {
                CoreError::Internal(format!("Negative project count {n} for status '{status}'"))
            })?;
            Ok((status, n))
        })
        .collect::<Result<Vec<_>, CoreError>>()?;
    Ok(ProjectStats::from_counts(counts))
}

/// POST /api/v1/projects
///
/// Submits a client brief. The new project starts in the proposal phase
/// with its proposal requested.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(brief): Json<ProjectBrief>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let agency_id = brief.agency_id;
    let new_proposal = brief.into_new_proposal(user.user_id)?;

    AgencyRepo::find_by_id(&state.pool, agency_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Agency",
            id: agency_id,
        }))?;
    require_actor(&state, user.user_id, agency_id).await?;

    let project = ProjectRepo::create(&state.pool, &new_proposal).await?;
    tracing::info!(
        project_id = project.id,
        agency_id,
        user_id = user.user_id,
        "Project brief submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = find_project(&state, id).await?;
    require_actor(&state, user.user_id, project.agency_id).await?;
    Ok(Json(DataResponse { data: project }))
}

pub(crate) async fn find_project(state: &AppState, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}
