//! Error type for the repository layer.

use donaria_core::types::DbId;

/// Errors surfaced by the repositories.
///
/// `Validation` and `NotFound` carry display-ready messages; callers may
/// show them to end users as-is. Driver failures pass through unchanged
/// as `Database`.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A caller-supplied field failed a pre-write check.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A row the operation depends on does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Any underlying database error.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
