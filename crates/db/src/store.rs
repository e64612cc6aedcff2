//! PostgreSQL implementation of the proposal workflow's [`ProjectStore`].

use agencyhub_core::error::CoreError;
use agencyhub_core::proposal_status::{ProjectStatus, ProposalStatus};
use agencyhub_core::proposal_transition::TransitionOutcome;
use agencyhub_core::proposal_workflow::{ProjectStore, ProposalRecord};
use agencyhub_core::roles::Membership;
use agencyhub_core::types::DbId;

use crate::repositories::{AgencyMemberRepo, ProjectRepo};
use crate::DbPool;

/// Project store backed by the `projects` and `agency_members` tables.
#[derive(Debug, Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map a sqlx failure to a persistence error, logging the operation.
fn persistence(
    operation: &'static str,
    project_id: DbId,
) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| {
        tracing::error!(error = %err, project_id, operation, "Project store failure");
        CoreError::Persistence(err.to_string())
    }
}

impl ProjectStore for PgProjectStore {
    async fn read_project(&self, project_id: DbId) -> Result<Option<ProposalRecord>, CoreError> {
        let project = ProjectRepo::find_by_id(&self.pool, project_id)
            .await
            .map_err(persistence("read_project", project_id))?;
        project.map(|p| p.to_proposal_record()).transpose()
    }

    async fn read_membership(
        &self,
        user_id: DbId,
        agency_id: DbId,
    ) -> Result<Option<Membership>, CoreError> {
        let member = AgencyMemberRepo::find_for_user_in_agency(&self.pool, user_id, agency_id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, user_id, agency_id, "Membership lookup failed");
                CoreError::Persistence(err.to_string())
            })?;
        member
            .map(|m| {
                m.to_membership().map_err(|e| {
                    CoreError::Internal(format!("Membership {} is unreadable: {e}", m.id))
                })
            })
            .transpose()
    }

    async fn update_proposal_status(
        &self,
        project_id: DbId,
        status: ProposalStatus,
        feedback: Option<&str>,
    ) -> Result<bool, CoreError> {
        ProjectRepo::update_proposal_status(&self.pool, project_id, status, feedback)
            .await
            .map_err(persistence("update_proposal_status", project_id))
    }

    async fn update_project_status(
        &self,
        project_id: DbId,
        status: ProjectStatus,
    ) -> Result<bool, CoreError> {
        ProjectRepo::update_status(&self.pool, project_id, status)
            .await
            .map_err(persistence("update_project_status", project_id))
    }

    async fn apply_transition(
        &self,
        project_id: DbId,
        outcome: &TransitionOutcome,
    ) -> Result<bool, CoreError> {
        ProjectRepo::apply_transition(&self.pool, project_id, outcome)
            .await
            .map_err(persistence("apply_transition", project_id))
    }
}
