//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values, plus a few
//! requests that exercise the body extractor.

mod common;

use axum::body::Body;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use taskboard_api::error::AppError;
use taskboard_core::error::CoreError;
use taskboard_core::types::EntityKind;
use taskboard_insights::InsightsError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_with_entity_code() {
    let err = AppError::Core(CoreError::NotFound {
        entity: EntityKind::Project,
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "PROJECT_NOT_FOUND");
    assert_eq!(json["error"], "Project with id 42 not found");
}

#[tokio::test]
async fn reference_not_found_is_a_client_error() {
    let err = AppError::Core(CoreError::ReferenceNotFound {
        entity: EntityKind::TeamMember,
        id: 5,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "TEAM_MEMBER_NOT_FOUND");
}

#[tokio::test]
async fn missing_field_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::MissingField { field: "name" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MISSING_FIELD");
    assert_eq!(json["error"], "name is required");
}

#[tokio::test]
async fn duplicate_email_returns_400() {
    let err = AppError::Core(CoreError::Duplicate {
        field: "email",
        value: "a@b.io".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn internal_error_returns_500() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Internal("boom".into()))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn pool_failure_returns_500_with_detail() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Internal server error: "));
}

#[tokio::test]
async fn unknown_upstream_status_falls_back_to_bad_gateway() {
    let err = AppError::Insights(InsightsError::Upstream {
        status: 1000,
        body: String::new(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn malformed_json_body_returns_invalid_body() {
    let app = common::build_test_app(common::test_pool().await);
    let response = common::send(
        app,
        Method::POST,
        "/api/v1/projects",
        Body::from("{not json"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::body_json(response).await["code"], "INVALID_BODY");
}
