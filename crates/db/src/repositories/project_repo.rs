//! Repository for the `projects` table.

use agencyhub_core::project_brief::NewProposal;
use agencyhub_core::proposal_status::{ProjectStatus, ProposalStatus};
use agencyhub_core::proposal_transition::TransitionOutcome;
use agencyhub_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, agency_id, created_by, status, \
    proposal_status, feedback, project_type, help_type, goals, budget_range, \
    client_name, start_date, completion_date, created_at, updated_at";

/// Agencies whose projects the user bound to `$1` may see.
const VISIBLE_AGENCIES: &str =
    "SELECT agency_id FROM agency_members WHERE user_id = $1 AND status = 'approved'";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project created from a client brief, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewProposal) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (name, description, agency_id, created_by, status, proposal_status,
                 project_type, help_type, goals, budget_range, completion_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.agency_id)
            .bind(input.created_by)
            .bind(input.status.as_str())
            .bind(input.proposal_status.as_str())
            .bind(&input.project_type)
            .bind(&input.help_type)
            .bind(&input.goals)
            .bind(&input.budget_range)
            .bind(input.completion_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects in agencies where `user_id` is an approved member,
    /// newest first, optionally restricted to one agency.
    pub async fn list_visible_to(
        pool: &PgPool,
        user_id: DbId,
        agency_id: Option<DbId>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE agency_id IN ({VISIBLE_AGENCIES})
               AND ($2::BIGINT IS NULL OR agency_id = $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .bind(agency_id)
            .fetch_all(pool)
            .await
    }

    /// Counts by overall status over the projects [`Self::list_visible_to`]
    /// would return.
    pub async fn count_visible_by_status(
        pool: &PgPool,
        user_id: DbId,
        agency_id: Option<DbId>,
    ) -> Result<Vec<(String, i64)>, sqlx::Error> {
        let query = format!(
            "SELECT status, COUNT(*) FROM projects
             WHERE agency_id IN ({VISIBLE_AGENCIES})
               AND ($2::BIGINT IS NULL OR agency_id = $2)
             GROUP BY status"
        );
        sqlx::query_as::<_, (String, i64)>(&query)
            .bind(user_id)
            .bind(agency_id)
            .fetch_all(pool)
            .await
    }

    /// Set the proposal status. Feedback is only overwritten when `Some`.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update_proposal_status<'e, E>(
        executor: E,
        id: DbId,
        status: ProposalStatus,
        feedback: Option<&str>,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            "UPDATE projects
             SET proposal_status = $2, feedback = COALESCE($3, feedback)
             WHERE id = $1",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(feedback)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the overall project status. Returns `true` if a row was updated.
    pub async fn update_status<'e, E>(
        executor: E,
        id: DbId,
        status: ProjectStatus,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("UPDATE projects SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Persist a proposal transition in one transaction.
    ///
    /// Returns `false` (and writes nothing) if the project does not exist.
    pub async fn apply_transition(
        pool: &PgPool,
        id: DbId,
        outcome: &TransitionOutcome,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let found = Self::update_proposal_status(
            &mut *tx,
            id,
            outcome.proposal_status,
            outcome.feedback.as_deref(),
        )
        .await?;
        if !found {
            tx.rollback().await?;
            return Ok(false);
        }

        if let Some(project_status) = outcome.project_status {
            Self::update_status(&mut *tx, id, project_status).await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}
