//! Repository for the `organizations` table.

use donaria_core::types::DbId;
use sqlx::PgPool;

use crate::models::organization::{BaseOrganization, Organization};

const COLUMNS: &str =
    "id, name, logo, slug, email, phone, about, website, created_at, updated_at";

/// Column subset for the embeddable summary view.
const BASE_COLUMNS: &str = "id, name, logo, slug";

/// Lookups over organizations. Account management owns the writes;
/// this layer only resolves references.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Find an organization by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE id = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the summary view of an organization.
    pub async fn find_base(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BaseOrganization>, sqlx::Error> {
        let query = format!("SELECT {BASE_COLUMNS} FROM organizations WHERE id = $1");
        sqlx::query_as::<_, BaseOrganization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
