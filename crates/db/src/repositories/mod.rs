//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod need_repo;
pub mod organization_repo;

pub use category_repo::CategoryRepo;
pub use need_repo::NeedRepo;
pub use organization_repo::OrganizationRepo;
