//! Request extractors.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use taskboard_core::error::{codes, CoreError};
use taskboard_core::fields::{invalid_body, parse_id};
use taskboard_core::types::DbId;

use crate::error::AppError;

/// JSON body extractor whose rejections use the API error format
/// (`400 INVALID_BODY`) instead of axum's plain-text responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(invalid_body(rejection.body_text()).into()),
        }
    }
}

/// A record id taken from the `{id}` path segment.
///
/// Non-numeric segments are rejected with `400 INVALID_ID` before the
/// handler (and its body extractor) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub DbId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CoreError::invalid(codes::INVALID_ID, rejection.body_text()))?;
        Ok(PathId(parse_id(&raw, codes::INVALID_ID, "ID")?))
    }
}
