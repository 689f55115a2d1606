#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use taskboard_api::config::ServerConfig;
use taskboard_api::router::build_app_router;
use taskboard_api::state::AppState;
use taskboard_db::DbPool;
use taskboard_insights::{CompletionService, InsightsError};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Canned completion service standing in for the network client.
pub struct StubCompletion {
    reply: Box<dyn Fn() -> Result<String, InsightsError> + Send + Sync>,
    calls: AtomicUsize,
}

impl StubCompletion {
    pub fn replying(text: &str) -> Arc<Self> {
        let text = text.to_string();
        Self::with(move || Ok(text.clone()))
    }

    pub fn with(
        reply: impl Fn() -> Result<String, InsightsError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            reply: Box::new(reply),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, InsightsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.reply)()
    }
}

/// Fresh in-memory database with migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = taskboard_db::create_pool("sqlite::memory:").await.unwrap();
    taskboard_db::run_migrations(&pool).await.unwrap();
    pool
}

/// Build the full application router over `pool` with the given
/// completion service.
pub fn build_test_app_with(pool: DbPool, insights: Arc<dyn CompletionService>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        insights,
    };
    build_app_router(state, &config)
}

/// Build the full application router over `pool`. The completion service
/// answers with an empty JSON object.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with(pool, StubCompletion::replying("{}"))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a record and return its JSON.
pub async fn create(app: Router, uri: &str, json: serde_json::Value) -> serde_json::Value {
    let response = post_json(app, uri, json).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
