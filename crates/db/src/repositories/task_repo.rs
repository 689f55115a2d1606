//! Repository for the `tasks` table.
//!
//! Task updates that touch status or ownership also recompute the owning
//! project's progress inside the same transaction.

use chrono::Utc;
use sqlx::SqlitePool;
use taskboard_core::search::like_pattern;
use taskboard_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskListFilter, UpdateTask};
use crate::repositories::ProjectRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, status, assigned_to, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO tasks (project_id, name, status, assigned_to, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(input.status)
            .bind(input.assigned_to)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tasks newest first with optional search and equality filters.
    pub async fn list(pool: &SqlitePool, filter: &TaskListFilter) -> Result<Vec<Task>, sqlx::Error> {
        let pattern = filter.search.as_deref().and_then(like_pattern);
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE (?1 IS NULL OR LOWER(name) LIKE ?1 ESCAPE '\\')
               AND (?2 IS NULL OR project_id = ?2)
               AND (?3 IS NULL OR status = ?3)
               AND (?4 IS NULL OR assigned_to = ?4)
             ORDER BY created_at DESC, id DESC
             LIMIT ?5 OFFSET ?6"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(pattern)
            .bind(filter.project_id)
            .bind(filter.status)
            .bind(filter.assigned_to)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// All tasks of one project, oldest first.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_id = ?1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied and
    /// `updated_at` is always advanced.
    ///
    /// When the update changes status or project, the owning project's
    /// progress is recomputed in the same transaction. If the task moved,
    /// the previous project is recomputed as well.
    ///
    /// The transaction takes the write lock up front so concurrent updates
    /// queue on the busy timeout instead of failing on a stale read snapshot.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

        let previous: Option<(DbId,)> = sqlx::query_as("SELECT project_id FROM tasks WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((previous_project_id,)) = previous else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE tasks SET
                project_id = COALESCE(?2, project_id),
                name = COALESCE(?3, name),
                status = COALESCE(?4, status),
                assigned_to = CASE WHEN ?5 THEN ?6 ELSE assigned_to END,
                updated_at = ?7
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(input.status)
            .bind(input.assigned_to.is_some())
            .bind(input.assigned_to.flatten())
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        if input.affects_progress() {
            ProjectRepo::recalculate_progress(&mut tx, task.project_id).await?;
            if previous_project_id != task.project_id {
                ProjectRepo::recalculate_progress(&mut tx, previous_project_id).await?;
            }
        }

        tx.commit().await?;
        Ok(Some(task))
    }

    /// Delete a task, returning the removed row.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("DELETE FROM tasks WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
