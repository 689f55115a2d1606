//! Handler for workspace-wide search.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use taskboard_core::search::is_searchable;
use taskboard_db::models::project::{Project, ProjectListFilter};
use taskboard_db::models::task::{Task, TaskListFilter};
use taskboard_db::models::team_member::{TeamMember, TeamMemberListFilter};
use taskboard_db::repositories::{ProjectRepo, TaskRepo, TeamMemberRepo};

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::state::AppState;

/// Matches per entity, each newest first.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub team_members: Vec<TeamMember>,
}

/// GET /api/v1/search?q=&limit=
///
/// Queries shorter than two characters return empty lists.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResults>> {
    let limit = params.limit()?;
    let query = params.q.unwrap_or_default();
    if !is_searchable(&query) {
        return Ok(Json(SearchResults::default()));
    }

    let projects = ProjectRepo::list(
        &state.pool,
        &ProjectListFilter {
            search: Some(query.clone()),
            limit,
            ..Default::default()
        },
    )
    .await?;
    let tasks = TaskRepo::list(
        &state.pool,
        &TaskListFilter {
            search: Some(query.clone()),
            limit,
            ..Default::default()
        },
    )
    .await?;
    let team_members = TeamMemberRepo::list(
        &state.pool,
        &TeamMemberListFilter {
            search: Some(query),
            limit,
            offset: 0,
        },
    )
    .await?;

    Ok(Json(SearchResults {
        projects,
        tasks,
        team_members,
    }))
}
