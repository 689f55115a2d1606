//! Handler for `POST /insights`.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use taskboard_core::error::{codes, CoreError};
use taskboard_insights::{generate_insights, is_empty_content, Insights};

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::state::AppState;

/// Request body: arbitrary workspace content to analyse.
#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    #[serde(default)]
    pub content: serde_json::Value,
}

/// POST /api/v1/insights
///
/// Empty content is rejected before the completion service is contacted.
pub async fn generate(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<InsightsRequest>,
) -> AppResult<Json<Insights>> {
    if is_empty_content(&body.content) {
        return Err(CoreError::invalid(codes::MISSING_CONTENT, "Content is required").into());
    }

    let insights = generate_insights(state.insights.as_ref(), &body.content).await?;
    Ok(Json(insights))
}
