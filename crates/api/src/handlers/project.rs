//! Handlers for the `/projects` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_core::types::{DbId, EntityKind};
use taskboard_db::models::project::{
    CreateProjectRequest, Project, ProjectWithTasks, UpdateProjectRequest,
};
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{PathId, ValidJson};
use crate::query::ProjectListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: EntityKind::Project,
        id,
    })
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let input = input.validate()?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<Vec<Project>>> {
    let filter = params.into_filter()?;
    let projects = ProjectRepo::list(&state.pool, &filter).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}/with-tasks
pub async fn get_with_tasks(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<ProjectWithTasks>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let tasks = TaskRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(ProjectWithTasks { project, tasks }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidJson(input): ValidJson<UpdateProjectRequest>,
) -> AppResult<Json<Project>> {
    if !ProjectRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }
    let input = input.validate()?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Returns the deleted project. Its tasks are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(project))
}
