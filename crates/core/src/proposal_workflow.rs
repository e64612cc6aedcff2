//! Proposal workflow service over an abstract project store.
//!
//! [`ProposalWorkflow`] is the only path that mutates a proposal. It derives
//! the caller's [`Actor`] from their agency membership, re-checks the policy
//! before anything is written, runs the transition executor, and hands the
//! outcome to the store as a single write.

use std::future::Future;

use serde::Serialize;

use crate::error::CoreError;
use crate::proposal_policy::{available_actions, is_allowed};
use crate::proposal_status::{ProjectStatus, ProposalAction, ProposalStatus, StatusTone};
use crate::proposal_transition::{apply_action, TransitionOutcome};
use crate::roles::{Actor, Membership};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Store interface
// ---------------------------------------------------------------------------

/// The slice of a project row the workflow reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalRecord {
    pub id: DbId,
    pub agency_id: DbId,
    pub status: ProjectStatus,
    pub proposal_status: Option<ProposalStatus>,
    pub feedback: Option<String>,
}

impl ProposalRecord {
    /// The proposal status, if the project is still in its proposal phase.
    pub fn active_proposal_status(&self) -> Option<ProposalStatus> {
        match self.status {
            ProjectStatus::Proposal => self.proposal_status,
            _ => None,
        }
    }
}

/// Persistent store for projects and agency memberships.
///
/// Update methods return `Ok(false)` when no row matched `project_id`.
pub trait ProjectStore: Send + Sync {
    fn read_project(
        &self,
        project_id: DbId,
    ) -> impl Future<Output = Result<Option<ProposalRecord>, CoreError>> + Send;

    /// The caller's membership in `agency_id`, whatever its status.
    fn read_membership(
        &self,
        user_id: DbId,
        agency_id: DbId,
    ) -> impl Future<Output = Result<Option<Membership>, CoreError>> + Send;

    /// Set the proposal status, and the feedback when `feedback` is `Some`.
    fn update_proposal_status(
        &self,
        project_id: DbId,
        status: ProposalStatus,
        feedback: Option<&str>,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn update_project_status(
        &self,
        project_id: DbId,
        status: ProjectStatus,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Persist every write in `outcome` atomically: either all of them land
    /// or none do.
    fn apply_transition(
        &self,
        project_id: DbId,
        outcome: &TransitionOutcome,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// What a caller may do with a proposal right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalOptions {
    pub project_id: DbId,
    pub status: ProjectStatus,
    pub proposal_status: Option<ProposalStatus>,
    pub tone: StatusTone,
    /// Badge classes for `tone`.
    pub tone_classes: &'static str,
    pub actor: Actor,
    pub actions: Vec<ProposalAction>,
}

pub struct ProposalWorkflow<'a, S> {
    store: &'a S,
}

impl<'a, S: ProjectStore> ProposalWorkflow<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Actions offered to `user_id` on `project_id`.
    ///
    /// Only approved members of the project's agency may read the proposal;
    /// anyone else is `Forbidden`. A member whose actor matches no rule gets
    /// an empty list.
    pub async fn offered_actions(
        &self,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<ProposalOptions, CoreError> {
        let record = self.load(project_id).await?;
        let actor = self.require_actor(user_id, record.agency_id).await?;

        let actions = record
            .active_proposal_status()
            .map(|status| available_actions(status, actor))
            .unwrap_or_default();

        let tone = record
            .proposal_status
            .map(|s| s.tone())
            .unwrap_or(StatusTone::Gray);

        Ok(ProposalOptions {
            project_id,
            status: record.status,
            proposal_status: record.proposal_status,
            tone,
            tone_classes: tone.classes(),
            actor,
            actions,
        })
    }

    /// Perform `action` on `project_id` as `user_id`.
    ///
    /// Authorization and feedback validation both fail before the store is
    /// written to.
    pub async fn perform(
        &self,
        project_id: DbId,
        user_id: DbId,
        action: ProposalAction,
        feedback: Option<&str>,
    ) -> Result<TransitionOutcome, CoreError> {
        let record = self.load(project_id).await?;

        let actor = self.require_actor(user_id, record.agency_id).await?;

        let current = record.active_proposal_status().ok_or_else(|| {
            CoreError::Forbidden(format!("Project {project_id} is not in the proposal phase"))
        })?;

        if !is_allowed(action, current, actor) {
            tracing::warn!(
                project_id,
                user_id,
                action = %action,
                proposal_status = %current,
                role = actor.role.as_str(),
                user_type = actor.user_type.as_str(),
                "Proposal action rejected by policy"
            );
            return Err(CoreError::Forbidden(format!(
                "Action '{action}' is not available on a proposal that is '{current}'"
            )));
        }

        let outcome = apply_action(action, feedback)?;

        let applied = self.store.apply_transition(project_id, &outcome).await?;
        if !applied {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            });
        }

        tracing::info!(
            project_id,
            user_id,
            action = %action,
            from = %current,
            to = %outcome.proposal_status,
            project_status = ?outcome.project_status,
            "Proposal transition applied"
        );

        Ok(outcome)
    }

    async fn load(&self, project_id: DbId) -> Result<ProposalRecord, CoreError> {
        self.store
            .read_project(project_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            })
    }

    async fn require_actor(&self, user_id: DbId, agency_id: DbId) -> Result<Actor, CoreError> {
        let membership = self.store.read_membership(user_id, agency_id).await?;
        membership.and_then(|m| m.actor()).ok_or_else(|| {
            CoreError::Forbidden(format!(
                "User {user_id} is not an approved member of agency {agency_id}"
            ))
        })
    }
}
