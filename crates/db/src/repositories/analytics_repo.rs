//! Read-only aggregates for the analytics summary.

use std::collections::HashMap;

use sqlx::SqlitePool;
use taskboard_core::analytics::{average_progress, completion_rate, progress_distribution};

use crate::models::analytics::{StatusCount, WorkspaceSummary};
use crate::models::status::{ProjectStatus, TaskStatus};

/// Aggregate queries across projects, tasks and team members.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Build the workspace summary.
    ///
    /// Every known status is listed, with a zero count when unused.
    pub async fn workspace_summary(pool: &SqlitePool) -> Result<WorkspaceSummary, sqlx::Error> {
        let project_rows: Vec<(ProjectStatus, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM projects GROUP BY status")
                .fetch_all(pool)
                .await?;
        let task_rows: Vec<(TaskStatus, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM tasks GROUP BY status")
                .fetch_all(pool)
                .await?;
        let (total_team_members,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM team_members")
            .fetch_one(pool)
            .await?;
        let progress: Vec<i32> = sqlx::query_scalar("SELECT progress FROM projects")
            .fetch_all(pool)
            .await?;

        let projects_by_status = counts_for(&ProjectStatus::ALL, project_rows);
        let tasks_by_status = counts_for(&TaskStatus::ALL, task_rows);

        let total_projects: i64 = projects_by_status.iter().map(|c| c.count).sum();
        let total_tasks: i64 = tasks_by_status.iter().map(|c| c.count).sum();
        let completed_projects = count_of(&projects_by_status, ProjectStatus::Completed);
        let completed_tasks = count_of(&tasks_by_status, TaskStatus::Complete);

        Ok(WorkspaceSummary {
            total_projects,
            total_tasks,
            total_team_members,
            project_completion_rate: completion_rate(completed_projects, total_projects),
            task_completion_rate: completion_rate(completed_tasks, total_tasks),
            average_progress: average_progress(&progress),
            progress_distribution: progress_distribution(progress.iter().copied()),
            projects_by_status,
            tasks_by_status,
        })
    }
}

fn counts_for<S>(all: &[S], rows: Vec<(S, i64)>) -> Vec<StatusCount<S>>
where
    S: Copy + Eq + std::hash::Hash,
{
    let found: HashMap<S, i64> = rows.into_iter().collect();
    all.iter()
        .map(|status| StatusCount {
            status: *status,
            count: found.get(status).copied().unwrap_or(0),
        })
        .collect()
}

fn count_of<S: PartialEq>(counts: &[StatusCount<S>], status: S) -> i64 {
    counts
        .iter()
        .find(|c| c.status == status)
        .map_or(0, |c| c.count)
}
