//! Need entity models and DTOs.
//!
//! Covers two related tables:
//! - `needs` -- donation/resource requests owned by an organization
//! - `needs_images` -- images attached to a need

use chrono::NaiveDate;
use donaria_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::Category;
use crate::models::organization::BaseOrganization;
use crate::models::status::StatusId;

/// A row from the `needs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Need {
    pub id: DbId,
    pub category_id: DbId,
    pub organization_id: DbId,
    pub title: String,
    pub description: String,
    pub required_qty: i32,
    pub reached_qty: i32,
    pub due_date: Option<NaiveDate>,
    pub unit: String,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new need.
///
/// Carries no status field: a new need always starts Active.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNeed {
    pub category_id: DbId,
    pub organization_id: DbId,
    pub title: String,
    pub description: String,
    pub required_qty: i32,
    pub reached_qty: i32,
    pub due_date: Option<NaiveDate>,
    pub unit: String,
}

/// DTO for updating an existing need. Replaces every mutable business
/// field; status is caller-supplied, not forced.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNeed {
    pub category_id: DbId,
    /// Checked for existence, never rewritten; a need cannot change owner.
    pub organization_id: DbId,
    pub title: String,
    pub description: String,
    pub required_qty: i32,
    pub reached_qty: i32,
    pub due_date: Option<NaiveDate>,
    pub unit: String,
    pub status_id: StatusId,
}

/// A row from the `needs_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NeedImage {
    pub id: DbId,
    pub need_id: DbId,
    pub name: String,
    pub url: String,
    pub created_at: Timestamp,
}

/// DTO for attaching a new image to a need.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNeedImage {
    pub need_id: DbId,
    pub name: String,
    pub url: String,
}

/// A need enriched with every relation: images, category and the owning
/// organization's summary. Returned by `NeedRepo::find_by_id`.
#[derive(Debug, Clone, Serialize)]
pub struct NeedDetail {
    #[serde(flatten)]
    pub need: Need,
    pub images: Vec<NeedImage>,
    pub category: Category,
    pub organization: BaseOrganization,
}

/// A need as listed for its organization: category and images embedded,
/// the organization itself omitted since the caller already holds it.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationNeed {
    #[serde(flatten)]
    pub need: Need,
    pub images: Vec<NeedImage>,
    pub category: Category,
}
