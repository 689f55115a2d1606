//! HTTP-level integration tests for the `/tasks` endpoints, including the
//! derived project progress rule.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, create, delete, get, post_json, put_json};
use serde_json::json;

async fn project_id(app: &Router) -> i64 {
    let project = create(app.clone(), "/api/v1/projects", json!({"name": "P"})).await;
    project["id"].as_i64().unwrap()
}

async fn progress_of(app: &Router, id: i64) -> serde_json::Value {
    let response = get(app.clone(), &format!("/api/v1/projects/{id}")).await;
    body_json(response).await["progress"].clone()
}

#[tokio::test]
async fn test_create_task_accepts_numeric_string_ids() {
    let app = common::build_test_app(common::test_pool().await);
    let pid = project_id(&app).await;

    let response = post_json(
        app,
        "/api/v1/tasks",
        json!({"projectId": pid.to_string(), "name": " Write docs "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["projectId"], pid);
    assert_eq!(json["name"], "Write docs");
    assert_eq!(json["status"], "incomplete");
    assert!(json["assignedTo"].is_null());
}

#[tokio::test]
async fn test_create_task_validation() {
    let app = common::build_test_app(common::test_pool().await);
    let pid = project_id(&app).await;

    let cases = [
        (json!({"name": "x"}), "MISSING_FIELD"),
        (json!({"projectId": pid}), "MISSING_FIELD"),
        (json!({"projectId": "12abc", "name": "x"}), "INVALID_PROJECT_ID"),
        (json!({"projectId": 1.5, "name": "x"}), "INVALID_PROJECT_ID"),
        (json!({"projectId": pid, "name": "x", "status": "done"}), "INVALID_STATUS"),
        (json!({"projectId": pid, "name": "x", "assignedTo": "me"}), "INVALID_ASSIGNED_TO"),
        (json!({"projectId": 999, "name": "x"}), "PROJECT_NOT_FOUND"),
        (json!({"projectId": pid, "name": "x", "assignedTo": 999}), "TEAM_MEMBER_NOT_FOUND"),
    ];

    for (body, code) in cases {
        let response = post_json(app.clone(), "/api/v1/tasks", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(body_json(response).await["code"], code, "body: {body}");
    }
}

#[tokio::test]
async fn test_status_update_sets_project_progress() {
    let app = common::build_test_app(common::test_pool().await);
    let pid = project_id(&app).await;

    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let task = create(
            app.clone(),
            "/api/v1/tasks",
            json!({"projectId": pid, "name": name}),
        )
        .await;
        ids.push(task["id"].as_i64().unwrap());
    }

    let response = put_json(
        app.clone(),
        &format!("/api/v1/tasks/{}", ids[0]),
        json!({"status": "complete"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "complete");
    assert_eq!(progress_of(&app, pid).await, 33);

    put_json(
        app.clone(),
        &format!("/api/v1/tasks/{}", ids[1]),
        json!({"status": "complete"}),
    )
    .await;
    assert_eq!(progress_of(&app, pid).await, 67);

    put_json(
        app.clone(),
        &format!("/api/v1/tasks/{}", ids[0]),
        json!({"status": "incomplete"}),
    )
    .await;
    assert_eq!(progress_of(&app, pid).await, 33);
}

#[tokio::test]
async fn test_rename_leaves_manual_progress() {
    let app = common::build_test_app(common::test_pool().await);
    let project = create(
        app.clone(),
        "/api/v1/projects",
        json!({"name": "Manual", "progress": 55}),
    )
    .await;
    let pid = project["id"].as_i64().unwrap();
    let task = create(
        app.clone(),
        "/api/v1/tasks",
        json!({"projectId": pid, "name": "t"}),
    )
    .await;

    put_json(
        app.clone(),
        &format!("/api/v1/tasks/{}", task["id"]),
        json!({"name": "renamed"}),
    )
    .await;
    assert_eq!(progress_of(&app, pid).await, 55);
}

#[tokio::test]
async fn test_assignment_can_be_cleared_with_null() {
    let app = common::build_test_app(common::test_pool().await);
    let pid = project_id(&app).await;
    let member = create(
        app.clone(),
        "/api/v1/team-members",
        json!({"name": "Ada", "email": "ada@example.com"}),
    )
    .await;
    let task = create(
        app.clone(),
        "/api/v1/tasks",
        json!({"projectId": pid, "name": "t", "assignedTo": member["id"]}),
    )
    .await;
    assert_eq!(task["assignedTo"], member["id"]);

    let response = put_json(
        app.clone(),
        &format!("/api/v1/tasks/{}", task["id"]),
        json!({"name": "still assigned"}),
    )
    .await;
    assert_eq!(body_json(response).await["assignedTo"], member["id"]);

    let response = put_json(
        app,
        &format!("/api/v1/tasks/{}", task["id"]),
        json!({"assignedTo": null}),
    )
    .await;
    assert!(body_json(response).await["assignedTo"].is_null());
}

#[tokio::test]
async fn test_update_task_errors() {
    let app = common::build_test_app(common::test_pool().await);
    let pid = project_id(&app).await;
    let task = create(
        app.clone(),
        "/api/v1/tasks",
        json!({"projectId": pid, "name": "t"}),
    )
    .await;

    let response = put_json(app.clone(), "/api/v1/tasks/9999", json!({"name": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "TASK_NOT_FOUND");

    let response = put_json(
        app,
        &format!("/api/v1/tasks/{}", task["id"]),
        json!({"projectId": 9999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "PROJECT_NOT_FOUND");
}

#[tokio::test]
async fn test_list_tasks_filters() {
    let app = common::build_test_app(common::test_pool().await);
    let first = project_id(&app).await;
    let second = project_id(&app).await;
    create(
        app.clone(),
        "/api/v1/tasks",
        json!({"projectId": first, "name": "Design", "status": "complete"}),
    )
    .await;
    create(
        app.clone(),
        "/api/v1/tasks",
        json!({"projectId": second, "name": "Build"}),
    )
    .await;

    let response = get(app.clone(), &format!("/api/v1/tasks?projectId={first}")).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Design");

    let response = get(app.clone(), "/api/v1/tasks?status=incomplete").await;
    assert_eq!(body_json(response).await[0]["name"], "Build");

    let response = get(app.clone(), "/api/v1/tasks?search=bui").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/tasks?assignedTo=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_ASSIGNED_TO");
}

#[tokio::test]
async fn test_delete_task_returns_record() {
    let app = common::build_test_app(common::test_pool().await);
    let pid = project_id(&app).await;
    let task = create(
        app.clone(),
        "/api/v1/tasks",
        json!({"projectId": pid, "name": "gone"}),
    )
    .await;

    let response = delete(app.clone(), &format!("/api/v1/tasks/{}", task["id"])).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "gone");

    let response = get(app, &format!("/api/v1/tasks/{}", task["id"])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_project_removes_its_tasks() {
    let app = common::build_test_app(common::test_pool().await);
    let pid = project_id(&app).await;
    let task = create(
        app.clone(),
        "/api/v1/tasks",
        json!({"projectId": pid, "name": "child"}),
    )
    .await;

    delete(app.clone(), &format!("/api/v1/projects/{pid}")).await;

    let response = get(app, &format!("/api/v1/tasks/{}", task["id"])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
