//! JSON view of the same rows the dashboard renders.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use pboard_db::repositories::PassengerRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/passengers
///
/// List every passenger in store-native order.
pub async fn list_passengers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let passengers = PassengerRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: passengers }))
}
