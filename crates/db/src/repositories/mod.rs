//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` (or an open transaction) as the first argument.

pub mod analytics_repo;
pub mod project_repo;
pub mod task_repo;
pub mod team_member_repo;

pub use analytics_repo::AnalyticsRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
pub use team_member_repo::TeamMemberRepo;
