use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/analytics`.
///
/// ```text
/// GET /summary  -> workspace summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/summary", get(analytics::summary))
}
