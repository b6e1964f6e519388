use axum::routing::get;
use axum::Router;

use crate::handlers::passengers;
use crate::state::AppState;

/// Passenger routes mounted at `/api/v1/passengers`.
///
/// ```text
/// GET /  -> list_passengers
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(passengers::list_passengers))
}
