//! Organization entity model and its embeddable summary view.

use donaria_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `organizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    pub logo: Option<String>,
    pub slug: String,
    pub email: String,
    pub phone: Option<String>,
    pub about: Option<String>,
    pub website: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Summary view of an organization, used for embedding inside a need.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BaseOrganization {
    pub id: DbId,
    pub name: String,
    pub logo: Option<String>,
    pub slug: String,
}
