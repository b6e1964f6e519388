//! Readiness of the store behind the dashboard.
//!
//! `db_healthy` says the store answers at all; `passengers_table` says the
//! dashboard query has something to read. Both must hold for `ok`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use pboard_db::repositories::PassengerRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub passengers_table: bool,
}

/// GET /health
///
/// Always answers 200; a failing store shows up in the body, not the status.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match pboard_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: store unreachable");
            false
        }
    };

    let passengers_table = db_healthy
        && match PassengerRepo::table_exists(&state.pool).await {
            Ok(exists) => exists,
            Err(e) => {
                tracing::warn!(error = %e, "Health check: table lookup failed");
                false
            }
        };

    Json(HealthResponse {
        status: if passengers_table { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        passengers_table,
    })
}

/// Mounted at the root, beside the dashboard page.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
