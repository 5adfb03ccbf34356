//! Repository for the `needs` and `needs_images` tables.

use donaria_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::need::{
    CreateNeed, CreateNeedImage, Need, NeedDetail, NeedImage, OrganizationNeed, UpdateNeed,
};
use crate::models::status::NeedStatus;
use crate::repositories::{CategoryRepo, OrganizationRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, organization_id, title, description, \
    required_qty, reached_qty, due_date, unit, status_id, created_at, updated_at";

/// Column list for the `needs_images` table.
const IMAGE_COLUMNS: &str = "id, need_id, name, url, created_at";

/// Provides CRUD operations for needs and their images.
///
/// Category and organization references are resolved through the
/// collaborator repositories before any write; reads embed the resolved
/// rows into the returned value.
pub struct NeedRepo;

impl NeedRepo {
    /// Find a need by ID, enriched with its images, its category and the
    /// owning organization's summary.
    ///
    /// The three enrichment reads run sequentially and are not wrapped in
    /// a transaction; the first failure aborts the rest.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<NeedDetail, DbError> {
        let query = format!("SELECT {COLUMNS} FROM needs WHERE id = $1");
        let need = sqlx::query_as::<_, Need>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound { entity: "need", id })?;

        let images = Self::list_images(pool, need.id).await?;
        let category = CategoryRepo::find_by_id(pool, need.category_id)
            .await?
            .ok_or(DbError::NotFound {
                entity: "category",
                id: need.category_id,
            })?;
        let organization = OrganizationRepo::find_base(pool, need.organization_id)
            .await?
            .ok_or(DbError::NotFound {
                entity: "organization",
                id: need.organization_id,
            })?;

        Ok(NeedDetail {
            need,
            images,
            category,
            organization,
        })
    }

    /// List the images attached to a need, oldest first.
    pub async fn list_images(pool: &PgPool, need_id: DbId) -> Result<Vec<NeedImage>, sqlx::Error> {
        let query =
            format!("SELECT {IMAGE_COLUMNS} FROM needs_images WHERE need_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, NeedImage>(&query)
            .bind(need_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new need, returning the created row.
    ///
    /// The caller cannot choose a status: every need starts Active.
    pub async fn create(pool: &PgPool, input: &CreateNeed) -> Result<Need, DbError> {
        Self::validate(pool, &input.title, input.category_id, input.organization_id).await?;

        let query = format!(
            "INSERT INTO needs \
                (category_id, organization_id, title, description, \
                 required_qty, reached_qty, due_date, unit, status_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        let need = sqlx::query_as::<_, Need>(&query)
            .bind(input.category_id)
            .bind(input.organization_id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.required_qty)
            .bind(input.reached_qty)
            .bind(input.due_date)
            .bind(&input.unit)
            .bind(NeedStatus::Active.id())
            .fetch_one(pool)
            .await?;
        Ok(need)
    }

    /// Update all mutable business fields of an existing need, stamping
    /// `updated_at`. Status is caller-supplied; the owning organization
    /// is validated but never rewritten.
    ///
    /// Returns `NotFound` when no row matches `id`.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateNeed) -> Result<Need, DbError> {
        Self::validate(pool, &input.title, input.category_id, input.organization_id).await?;

        let query = format!(
            "UPDATE needs SET \
                category_id = $2, \
                title = $3, \
                description = $4, \
                required_qty = $5, \
                reached_qty = $6, \
                due_date = $7, \
                unit = $8, \
                status_id = $9, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Need>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.required_qty)
            .bind(input.reached_qty)
            .bind(input.due_date)
            .bind(&input.unit)
            .bind(input.status_id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound { entity: "need", id })
    }

    /// Attach a new image to a need, returning the created row.
    pub async fn create_image(
        pool: &PgPool,
        input: &CreateNeedImage,
    ) -> Result<NeedImage, DbError> {
        let query = format!(
            "INSERT INTO needs_images (need_id, name, url) \
             VALUES ($1, $2, $3) \
             RETURNING {IMAGE_COLUMNS}"
        );
        let image = sqlx::query_as::<_, NeedImage>(&query)
            .bind(input.need_id)
            .bind(&input.name)
            .bind(&input.url)
            .fetch_one(pool)
            .await?;
        Ok(image)
    }

    /// Delete an image, matching both the image and its owning need so an
    /// image belonging to a different need is left untouched.
    ///
    /// Idempotent: an absent id/need pair affects zero rows and returns
    /// `false`, not an error.
    pub async fn delete_image(
        pool: &PgPool,
        image_id: DbId,
        need_id: DbId,
    ) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM needs_images WHERE id = $1 AND need_id = $2")
            .bind(image_id)
            .bind(need_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List an organization's needs, each enriched with its category and
    /// images.
    ///
    /// `sort` is restricted to `id` and `updated_at`; any other requested
    /// column falls back to `created_at`. `direction` must be `asc` or
    /// `desc` when a sort was requested, defaulting to `asc`. With no
    /// sort requested the rows come back in the database's natural order.
    pub async fn list_by_organization(
        pool: &PgPool,
        organization_id: DbId,
        sort: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Vec<OrganizationNeed>, DbError> {
        let query = match order_clause(sort, direction)? {
            Some(clause) => format!(
                "SELECT {COLUMNS} FROM needs WHERE organization_id = $1 ORDER BY {clause}"
            ),
            None => format!("SELECT {COLUMNS} FROM needs WHERE organization_id = $1"),
        };
        let rows = sqlx::query_as::<_, Need>(&query)
            .bind(organization_id)
            .fetch_all(pool)
            .await?;

        let mut needs = Vec::with_capacity(rows.len());
        for need in rows {
            let category = CategoryRepo::find_by_id(pool, need.category_id)
                .await?
                .ok_or(DbError::NotFound {
                    entity: "category",
                    id: need.category_id,
                })?;
            let images = Self::list_images(pool, need.id).await?;
            needs.push(OrganizationNeed {
                need,
                images,
                category,
            });
        }
        Ok(needs)
    }

    /// Shared pre-write check: non-empty title after trimming, and
    /// existing category and organization references. Read-only.
    async fn validate(
        pool: &PgPool,
        title: &str,
        category_id: DbId,
        organization_id: DbId,
    ) -> Result<(), DbError> {
        if title.trim().is_empty() {
            return Err(DbError::Validation {
                field: "title",
                message: "a title is required for the need".to_string(),
            });
        }

        CategoryRepo::find_by_id(pool, category_id)
            .await?
            .ok_or(DbError::NotFound {
                entity: "category",
                id: category_id,
            })?;

        OrganizationRepo::find_base(pool, organization_id)
            .await?
            .ok_or(DbError::NotFound {
                entity: "organization",
                id: organization_id,
            })?;

        Ok(())
    }
}

/// Build the ORDER BY clause for `list_by_organization`.
fn order_clause(sort: Option<&str>, direction: Option<&str>) -> Result<Option<String>, DbError> {
    let Some(sort) = sort else {
        return Ok(None);
    };

    let column = match sort {
        "id" | "updated_at" => sort,
        _ => "created_at",
    };

    let direction = match direction {
        None | Some("") => "asc",
        Some(d @ ("asc" | "desc")) => d,
        Some(other) => {
            return Err(DbError::Validation {
                field: "order",
                message: format!("unrecognized sort direction: {other}"),
            })
        }
    };

    Ok(Some(format!("{column} {direction}")))
}
