//! Handlers for a project's proposal: what the caller may do, and doing it.
//!
//! Every mutation goes through [`ProposalWorkflow`], which re-checks the
//! caller's authorization before anything is written.

use agencyhub_core::proposal_status::ProposalAction;
use agencyhub_core::proposal_transition::TransitionOutcome;
use agencyhub_core::proposal_workflow::{ProposalOptions, ProposalWorkflow};
use agencyhub_core::types::DbId;
use agencyhub_db::models::project::Project;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::project::find_project;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /projects/{id}/proposal/actions`.
#[derive(Debug, Deserialize)]
pub struct ProposalActionRequest {
    /// One of `approve`, `decline`, `send`, `create`, `update`.
    pub action: String,
    /// Required (non-blank) for `decline`; ignored otherwise.
    pub feedback: Option<String>,
}

/// The applied transition and the project as it now reads.
#[derive(Debug, Serialize)]
pub struct ProposalActionResponse {
    pub outcome: TransitionOutcome,
    pub project: Project,
}

/// GET /api/v1/projects/{id}/proposal
///
/// 403 unless the caller is an approved member of the project's agency.
pub async fn get_options(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProposalOptions>>> {
    let store = state.project_store();
    let options = ProposalWorkflow::new(&store)
        .offered_actions(id, user.user_id)
        .await?;
    Ok(Json(DataResponse { data: options }))
}

/// POST /api/v1/projects/{id}/proposal/actions
pub async fn perform_action(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ProposalActionRequest>,
) -> AppResult<Json<DataResponse<ProposalActionResponse>>> {
    let action = ProposalAction::from_str_db(input.action.trim())?;

    let store = state.project_store();
    let outcome = ProposalWorkflow::new(&store)
        .perform(id, user.user_id, action, input.feedback.as_deref())
        .await?;

    let project = find_project(&state, id).await?;
    Ok(Json(DataResponse {
        data: ProposalActionResponse { outcome, project },
    }))
}
