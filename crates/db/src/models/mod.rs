//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create/update DTO where the entity is writable

pub mod category;
pub mod need;
pub mod organization;
pub mod status;
