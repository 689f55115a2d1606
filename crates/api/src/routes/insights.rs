use axum::routing::post;
use axum::Router;

use crate::handlers::insights;
use crate::state::AppState;

/// Routes mounted at `/insights`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(insights::generate))
}
