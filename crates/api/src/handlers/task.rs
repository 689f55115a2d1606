//! Handlers for the `/tasks` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_core::types::{DbId, EntityKind};
use taskboard_db::models::task::{CreateTaskRequest, Task, UpdateTaskRequest};
use taskboard_db::repositories::{ProjectRepo, TaskRepo, TeamMemberRepo};
use taskboard_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{PathId, ValidJson};
use crate::query::TaskListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: EntityKind::Task,
        id,
    })
}

/// Fail with a 400 `*_NOT_FOUND` when a referenced project or member is missing.
async fn ensure_references(
    pool: &DbPool,
    project_id: Option<DbId>,
    assigned_to: Option<DbId>,
) -> AppResult<()> {
    if let Some(id) = project_id {
        if !ProjectRepo::exists(pool, id).await? {
            return Err(CoreError::ReferenceNotFound {
                entity: EntityKind::Project,
                id,
            }
            .into());
        }
    }
    if let Some(id) = assigned_to {
        if !TeamMemberRepo::exists(pool, id).await? {
            return Err(CoreError::ReferenceNotFound {
                entity: EntityKind::TeamMember,
                id,
            }
            .into());
        }
    }
    Ok(())
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let input = input.validate()?;
    ensure_references(&state.pool, Some(input.project_id), input.assigned_to).await?;

    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(task_id = task.id, project_id = task.project_id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<Vec<Task>>> {
    let filter = params.into_filter()?;
    let tasks = TaskRepo::list(&state.pool, &filter).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
///
/// A status or project change recomputes the owning project's progress.
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidJson(input): ValidJson<UpdateTaskRequest>,
) -> AppResult<Json<Task>> {
    if TaskRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }
    let input = input.validate()?;
    ensure_references(&state.pool, input.project_id, input.assigned_to.flatten()).await?;

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(
        task_id = id,
        progress_recomputed = input.affects_progress(),
        "Task updated"
    );
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(State(state): State<AppState>, PathId(id): PathId) -> AppResult<Json<Task>> {
    let task = TaskRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(task_id = id, "Task deleted");
    Ok(Json(task))
}
