//! Repository for the `projects` table.

use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use taskboard_core::progress::derived_progress;
use taskboard_core::search::like_pattern;
use taskboard_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectListFilter, UpdateProject};
use crate::models::status::TaskStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, status, progress, description, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `created_at` and `updated_at` are stamped with the same instant.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO projects (name, status, progress, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(input.status)
            .bind(input.progress)
            .bind(&input.description)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a project with the given ID exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM projects WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }

    /// List projects newest first with optional search and status filter.
    pub async fn list(
        pool: &SqlitePool,
        filter: &ProjectListFilter,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let pattern = filter.search.as_deref().and_then(like_pattern);
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE (?1 IS NULL
                    OR LOWER(name) LIKE ?1 ESCAPE '\\'
                    OR LOWER(COALESCE(description, '')) LIKE ?1 ESCAPE '\\')
               AND (?2 IS NULL OR status = ?2)
             ORDER BY created_at DESC, id DESC
             LIMIT ?3 OFFSET ?4"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(pattern)
            .bind(filter.status)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied and
    /// `updated_at` is always advanced.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE(?2, name),
                status = COALESCE(?3, status),
                progress = COALESCE(?4, progress),
                description = CASE WHEN ?5 THEN ?6 ELSE description END,
                updated_at = ?7
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.status)
            .bind(input.progress)
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a project, returning the removed row. Its tasks are removed by
    /// the `ON DELETE CASCADE` foreign key.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("DELETE FROM projects WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Recompute a project's progress from its task completion ratio within
    /// an existing transaction.
    ///
    /// Writes `round(100 * complete / total)` and advances `updated_at`.
    /// A project with no tasks keeps its stored progress and `None` is
    /// returned.
    pub async fn recalculate_progress(
        tx: &mut Transaction<'_, Sqlite>,
        project_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        let (total, completed): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(CASE WHEN status = ?2 THEN 1 ELSE 0 END), 0)
             FROM tasks WHERE project_id = ?1",
        )
        .bind(project_id)
        .bind(TaskStatus::Complete)
        .fetch_one(&mut **tx)
        .await?;

        let Some(progress) = derived_progress(completed, total) else {
            tracing::debug!(project_id, "Project has no tasks, progress left unchanged");
            return Ok(None);
        };

        sqlx::query("UPDATE projects SET progress = ?2, updated_at = ?3 WHERE id = ?1")
            .bind(project_id)
            .bind(progress)
            .bind(Utc::now())
            .execute(&mut **tx)
            .await?;

        tracing::debug!(project_id, completed, total, progress, "Project progress recalculated");
        Ok(Some(progress))
    }
}
