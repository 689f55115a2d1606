//! Handler for the analytics summary.

use axum::extract::State;
use axum::Json;
use taskboard_db::models::analytics::WorkspaceSummary;
use taskboard_db::repositories::AnalyticsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/analytics/summary
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<WorkspaceSummary>> {
    let summary = AnalyticsRepo::workspace_summary(&state.pool).await?;
    Ok(Json(summary))
}
