use std::collections::{BTreeMap, HashMap};

use importer_core::filter::ImportRowFilter;
use importer_core::import_row::{filter_rows, ImportRow};
use importer_core::pagination::{Pagination, PaginationRequest};
use importer_core::types::ImportId;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Row payload accepted when (re)loading an import. The index is assigned
/// from the position in the submitted list.
#[derive(Debug, Clone, Deserialize)]
pub struct NewImportRow {
    pub values: BTreeMap<String, String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// One page of filtered rows plus its pagination metadata.
#[derive(Debug, Serialize)]
pub struct RowPage {
    pub pagination: Pagination,
    pub filter: ImportRowFilter,
    pub rows: Vec<ImportRow>,
}

/// In-memory row storage for imports, keyed by import id.
///
/// Thread-safe via interior `RwLock`; wrap in `Arc` to share across handlers.
#[derive(Default)]
pub struct ImportRowStore {
    imports: RwLock<HashMap<ImportId, Vec<ImportRow>>>,
}

impl ImportRowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of imports currently held.
    pub async fn import_count(&self) -> usize {
        self.imports.read().await.len()
    }

    /// Replace all rows of an import, creating it if needed.
    ///
    /// Returns the number of rows stored.
    pub async fn replace(&self, import_id: ImportId, rows: Vec<NewImportRow>) -> usize {
        let rows: Vec<ImportRow> = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| ImportRow {
                index: index as i64,
                values: row.values,
                errors: row.errors,
            })
            .collect();
        let count = rows.len();
        self.imports.write().await.insert(import_id, rows);
        count
    }

    /// Fetch one page of an import's rows after applying `filter`.
    ///
    /// `total` in the returned pagination counts filtered rows. Returns
    /// `None` when the import is unknown.
    pub async fn page(
        &self,
        import_id: ImportId,
        filter: ImportRowFilter,
        request: PaginationRequest,
    ) -> Option<RowPage> {
        let imports = self.imports.read().await;
        let rows = imports.get(&import_id)?;

        let matching = filter_rows(rows, filter);
        let window = request.window(matching.len());
        let page: Vec<ImportRow> = matching[window].iter().map(|r| (*r).clone()).collect();

        Some(RowPage {
            pagination: Pagination::new(request, matching.len() as i64),
            filter,
            rows: page,
        })
    }
}
