//! Domain rules for the Taskboard workspace.
//!
//! Pure logic only: error taxonomy, field validation, progress maths,
//! pagination and analytics helpers. No database or HTTP dependencies.

pub mod analytics;
pub mod error;
pub mod fields;
pub mod progress;
pub mod search;
pub mod team;
pub mod types;
