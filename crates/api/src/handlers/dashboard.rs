//! Handler for the HTML dashboard page.

use axum::extract::State;
use axum::response::Html;
use pboard_core::render::{render_table, TablePage};
use pboard_db::repositories::PassengerRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /
///
/// Run the fixed passenger query and render every row as an HTML table.
/// The query runs on every page load; nothing is cached between requests.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let passengers = PassengerRepo::list(&state.pool).await?;

    let page = TablePage {
        title: &state.config.dashboard.title,
        caption: &state.config.dashboard.caption,
    };
    let html = render_table(&page, &passengers)?;

    tracing::debug!(rows = passengers.len(), "Rendered dashboard");

    Ok(Html(html))
}
