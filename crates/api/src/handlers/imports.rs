//! Handlers for reviewing the rows of an uploaded import.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use importer_core::error::CoreError;
use importer_core::types::ImportId;

use crate::error::AppResult;
use crate::query::{FilterQuery, PaginationQuery};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::store::NewImportRow;

/// Response body for a row replacement.
#[derive(Debug, Serialize)]
pub struct ReplaceRowsResponse {
    pub import_id: ImportId,
    pub row_count: usize,
}

/// GET /imports/{id}/rows?offset=&limit=&filter=
///
/// List one page of an import's rows, narrowed by `filter`.
pub async fn list_rows(
    State(state): State<AppState>,
    Path(id): Path<ImportId>,
    PaginationQuery(pagination): PaginationQuery,
    FilterQuery(filter): FilterQuery,
) -> AppResult<impl IntoResponse> {
    let page = state
        .rows
        .page(id, filter, pagination)
        .await
        .ok_or_else(|| CoreError::NotFound {
            entity: "Import",
            id: id.to_string(),
        })?;

    tracing::debug!(
        import_id = %id,
        offset = pagination.offset,
        limit = pagination.limit,
        filter = %filter,
        returned = page.rows.len(),
        total = page.pagination.total,
        "Listed import rows"
    );

    Ok(Json(DataResponse { data: page }))
}

/// PUT /imports/{id}/rows
///
/// Replace all rows of an import with the submitted list.
pub async fn replace_rows(
    State(state): State<AppState>,
    Path(id): Path<ImportId>,
    Json(rows): Json<Vec<NewImportRow>>,
) -> AppResult<impl IntoResponse> {
    let row_count = state.rows.replace(id, rows).await;

    tracing::info!(import_id = %id, row_count, "Replaced import rows");

    Ok(Json(DataResponse {
        data: ReplaceRowsResponse {
            import_id: id,
            row_count,
        },
    }))
}
