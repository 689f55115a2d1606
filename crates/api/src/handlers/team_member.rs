//! Handlers for the `/team-members` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use taskboard_core::error::CoreError;
use taskboard_core::types::{DbId, EntityKind};
use taskboard_db::models::team_member::{
    CreateTeamMemberRequest, TeamMember, TeamMemberWithTaskCount, UpdateTeamMemberRequest,
};
use taskboard_db::repositories::TeamMemberRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{PathId, ValidJson};
use crate::query::TeamMemberListParams;
use crate::state::AppState;

/// List response; task counts are included only when requested.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TeamMemberList {
    Plain(Vec<TeamMember>),
    WithTaskCounts(Vec<TeamMemberWithTaskCount>),
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: EntityKind::TeamMember,
        id,
    })
}

fn duplicate_email(email: &str) -> AppError {
    AppError::Core(CoreError::Duplicate {
        field: "email",
        value: email.to_string(),
    })
}

/// Map a write error, turning a unique violation into `DUPLICATE_EMAIL`.
fn map_write_error(err: sqlx::Error, email: &str) -> AppError {
    if taskboard_db::is_unique_violation(&err) {
        duplicate_email(email)
    } else {
        err.into()
    }
}

/// POST /api/v1/team-members
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateTeamMemberRequest>,
) -> AppResult<(StatusCode, Json<TeamMember>)> {
    let input = input.validate()?;
    if TeamMemberRepo::email_taken(&state.pool, &input.email, None).await? {
        return Err(duplicate_email(&input.email));
    }

    let member = TeamMemberRepo::create(&state.pool, &input)
        .await
        .map_err(|e| map_write_error(e, &input.email))?;
    tracing::info!(team_member_id = member.id, "Team member created");
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/team-members
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TeamMemberListParams>,
) -> AppResult<Json<TeamMemberList>> {
    let filter = params.to_filter()?;
    let members = if params.include_task_count() {
        TeamMemberList::WithTaskCounts(
            TeamMemberRepo::list_with_task_counts(&state.pool, &filter).await?,
        )
    } else {
        TeamMemberList::Plain(TeamMemberRepo::list(&state.pool, &filter).await?)
    };
    Ok(Json(members))
}

/// GET /api/v1/team-members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<TeamMemberWithTaskCount>> {
    let member = TeamMemberRepo::find_with_task_count(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(member))
}

/// PUT /api/v1/team-members/{id}
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidJson(input): ValidJson<UpdateTeamMemberRequest>,
) -> AppResult<Json<TeamMember>> {
    if !TeamMemberRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }
    let input = input.validate()?;
    if let Some(email) = &input.email {
        if TeamMemberRepo::email_taken(&state.pool, email, Some(id)).await? {
            return Err(duplicate_email(email));
        }
    }

    let member = TeamMemberRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| map_write_error(e, input.email.as_deref().unwrap_or_default()))?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(team_member_id = id, "Team member updated");
    Ok(Json(member))
}

/// DELETE /api/v1/team-members/{id}
///
/// Tasks assigned to the member become unassigned.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<TeamMember>> {
    let member = TeamMemberRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(team_member_id = id, "Team member deleted");
    Ok(Json(member))
}
