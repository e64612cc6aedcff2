//! Repository for the `agencies` table.

use agencyhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::agency::{Agency, CreateAgency};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_by, created_at, updated_at";

/// Provides CRUD operations for agencies.
pub struct AgencyRepo;

impl AgencyRepo {
    /// Insert an agency and make its creator an approved agency admin.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAgency,
        created_by: DbId,
    ) -> Result<Agency, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO agencies (name, description, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let agency = sqlx::query_as::<_, Agency>(&query)
            .bind(input.name.trim())
            .bind(&input.description)
            .bind(created_by)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO agency_members
                (agency_id, user_id, user_type, permission_level, status)
             VALUES ($1, $2, 'agency', 'admin', 'approved')",
        )
        .bind(agency.id)
        .bind(created_by)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(agency)
    }

    /// Find an agency by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Agency>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agencies WHERE id = $1");
        sqlx::query_as::<_, Agency>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all agencies ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Agency>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agencies ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Agency>(&query).fetch_all(pool).await
    }
}
