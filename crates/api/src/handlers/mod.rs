//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate raw payloads into typed commands, delegate to the
//! repositories in `taskboard_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod analytics;
pub mod insights;
pub mod project;
pub mod search;
pub mod task;
pub mod team_member;
