use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskboard_core::error::{codes, CoreError};
use taskboard_insights::InsightsError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors plus storage and insight failures.
/// Implements [`IntoResponse`] to produce consistent `{ error, code }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure talking to the completion service.
    #[error(transparent)]
    Insights(#[from] InsightsError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Insights(err) => classify_insights_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    let status = match err {
        CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        CoreError::MissingField { .. }
        | CoreError::Invalid { .. }
        | CoreError::ReferenceNotFound { .. }
        | CoreError::Duplicate { .. } => StatusCode::BAD_REQUEST,
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, err.code(), err.to_string())
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations map to 400 `DUPLICATE_VALUE`.
/// - Everything else maps to 500 with the driver message appended.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if taskboard_db::is_unique_violation(err) {
        return (
            StatusCode::BAD_REQUEST,
            codes::DUPLICATE_VALUE,
            "Duplicate value violates a unique constraint".to_string(),
        );
    }
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            codes::NOT_FOUND,
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                codes::INTERNAL_ERROR,
                format!("Internal server error: {other}"),
            )
        }
    }
}

fn classify_insights_error(err: &InsightsError) -> (StatusCode, &'static str, String) {
    match err {
        InsightsError::NotConfigured => (
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::INSIGHTS_NOT_CONFIGURED,
            "Insights API key not configured".to_string(),
        ),
        InsightsError::Upstream { status, body } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            codes::UPSTREAM_ERROR,
            format!("Failed to generate insights: {body}"),
        ),
        InsightsError::Request(source) => {
            tracing::error!(error = %source, "Insights request failed");
            (
                StatusCode::BAD_GATEWAY,
                codes::UPSTREAM_ERROR,
                format!("Failed to generate insights: {source}"),
            )
        }
        InsightsError::EmptyCompletion => (
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::EMPTY_COMPLETION,
            "No insights generated".to_string(),
        ),
    }
}
