pub mod dashboard;
pub mod health;
pub mod passengers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /passengers        list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/passengers", passengers::router())
}
