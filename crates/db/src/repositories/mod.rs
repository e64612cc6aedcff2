//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or any Postgres executor) as the first argument.

pub mod agency_member_repo;
pub mod agency_repo;
pub mod project_repo;

pub use agency_member_repo::AgencyMemberRepo;
pub use agency_repo::AgencyRepo;
pub use project_repo::ProjectRepo;
