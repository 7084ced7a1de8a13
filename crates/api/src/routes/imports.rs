//! Route definitions for import row review.
//!
//! Mounted at `/imports` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::imports;
use crate::state::AppState;

/// Import routes.
///
/// ```text
/// GET    /{id}/rows                 -> list_rows (?offset, limit, filter)
/// PUT    /{id}/rows                 -> replace_rows
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}/rows",
        get(imports::list_rows).put(imports::replace_rows),
    )
}
