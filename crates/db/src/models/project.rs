//! Project entity model.

use agencyhub_core::error::CoreError;
use agencyhub_core::proposal_status::{ProjectStatus, ProposalStatus};
use agencyhub_core::proposal_workflow::ProposalRecord;
use agencyhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// Status columns are stored as text and parsed into core enums on demand.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub agency_id: DbId,
    pub created_by: DbId,
    pub status: String,
    pub proposal_status: Option<String>,
    pub feedback: Option<String>,
    pub project_type: Option<String>,
    pub help_type: Option<String>,
    pub goals: Option<String>,
    pub budget_range: Option<String>,
    pub client_name: Option<String>,
    pub start_date: Option<Timestamp>,
    pub completion_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Parse the row into the slice the proposal workflow reads.
    pub fn to_proposal_record(&self) -> Result<ProposalRecord, CoreError> {
        let status = ProjectStatus::from_str_db(&self.status).map_err(|e| self.corrupt(e))?;
        let proposal_status = self
            .proposal_status
            .as_deref()
            .map(ProposalStatus::from_str_db)
            .transpose()
            .map_err(|e| self.corrupt(e))?;

        Ok(ProposalRecord {
            id: self.id,
            agency_id: self.agency_id,
            status,
            proposal_status,
            feedback: self.feedback.clone(),
        })
    }

    fn corrupt(&self, err: CoreError) -> CoreError {
        CoreError::Internal(format!("Project {} has an unreadable status: {err}", self.id))
    }
}
