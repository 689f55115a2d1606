pub mod analytics;
pub mod health;
pub mod insights;
pub mod project;
pub mod search;
pub mod task;
pub mod team_member;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/with-tasks                        project plus its tasks
///
/// /tasks                                           list, create
/// /tasks/{id}                                      get, update, delete
///
/// /team-members                                    list, create
/// /team-members/{id}                               get, update, delete
///
/// /insights                                        generate (POST)
/// /search                                          workspace search
/// /analytics/summary                               aggregate counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/team-members", team_member::router())
        .nest("/insights", insights::router())
        .nest("/search", search::router())
        .nest("/analytics", analytics::router())
}
