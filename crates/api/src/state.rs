use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::ImportRowStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; inner data is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Row storage for uploaded imports.
    pub rows: Arc<ImportRowStore>,
    pub config: Arc<ServerConfig>,
}
