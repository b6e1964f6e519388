use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Owned by `main`, which closes it on shutdown.
    pub pool: pboard_db::DbPool,
    /// Server configuration (dashboard title and caption are read per request).
    pub config: Arc<ServerConfig>,
}
