use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard page mounted at the root.
///
/// ```text
/// GET /  -> index
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard::index))
}
