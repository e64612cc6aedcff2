//! Repository for the `agency_members` table.

use agencyhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::agency::{AgencyMember, CreateAgencyMember, UserMembership};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, agency_id, user_id, user_type, permission_level, role, \
    status, invited_by, created_at, updated_at";

/// Provides CRUD operations for agency memberships.
pub struct AgencyMemberRepo;

impl AgencyMemberRepo {
    /// Insert a membership row, returning the created row.
    ///
    /// Fails with a unique violation if the user already has a row for the
    /// agency.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAgencyMember,
    ) -> Result<AgencyMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO agency_members
                (agency_id, user_id, user_type, permission_level, status, invited_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AgencyMember>(&query)
            .bind(input.agency_id)
            .bind(input.user_id)
            .bind(input.user_type.as_str())
            .bind(input.permission_level.as_str())
            .bind(input.status.as_str())
            .bind(input.invited_by)
            .fetch_one(pool)
            .await
    }

    /// The membership of `user_id` in `agency_id`, whatever its status.
    pub async fn find_for_user_in_agency(
        pool: &PgPool,
        user_id: DbId,
        agency_id: DbId,
    ) -> Result<Option<AgencyMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM agency_members
             WHERE user_id = $1 AND agency_id = $2"
        );
        sqlx::query_as::<_, AgencyMember>(&query)
            .bind(user_id)
            .bind(agency_id)
            .fetch_optional(pool)
            .await
    }

    /// List the members of an agency, oldest first.
    pub async fn list_for_agency(
        pool: &PgPool,
        agency_id: DbId,
    ) -> Result<Vec<AgencyMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM agency_members
             WHERE agency_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, AgencyMember>(&query)
            .bind(agency_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's memberships across agencies, joined with agency names.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserMembership>, sqlx::Error> {
        sqlx::query_as::<_, UserMembership>(
            "SELECT m.id, m.agency_id, a.name AS agency_name, m.user_type,
                    m.permission_level, m.role, m.status, m.invited_by, m.created_at
             FROM agency_members m
             JOIN agencies a ON a.id = m.agency_id
             WHERE m.user_id = $1
             ORDER BY m.created_at DESC, m.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
