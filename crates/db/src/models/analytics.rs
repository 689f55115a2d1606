//! Workspace analytics read model.

use serde::Serialize;
use taskboard_core::analytics::ProgressBucket;

use crate::models::status::{ProjectStatus, TaskStatus};

/// Count of records sharing one status value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount<S> {
    pub status: S,
    pub count: i64,
}

/// Aggregate snapshot backing the analytics page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub total_projects: i64,
    pub total_tasks: i64,
    pub total_team_members: i64,
    pub projects_by_status: Vec<StatusCount<ProjectStatus>>,
    pub tasks_by_status: Vec<StatusCount<TaskStatus>>,
    /// Percentage of projects in `Completed`.
    pub project_completion_rate: i32,
    /// Percentage of tasks in `complete`.
    pub task_completion_rate: i32,
    pub average_progress: f64,
    pub progress_distribution: Vec<ProgressBucket>,
}
