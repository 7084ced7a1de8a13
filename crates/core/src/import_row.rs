//! Rows of an uploaded import and their validation outcome.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter::ImportRowFilter;

/// One data row of an import, keyed by template column key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    /// Zero-based position of the row in the uploaded file.
    pub index: i64,
    pub values: BTreeMap<String, String>,
    /// Validation messages; empty for a valid row.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ImportRow {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl ImportRowFilter {
    pub fn matches(self, row: &ImportRow) -> bool {
        match self {
            Self::All => true,
            Self::Valid => row.is_valid(),
            Self::Error => !row.is_valid(),
        }
    }
}

/// Rows selected by `filter`, in their original order.
pub fn filter_rows(rows: &[ImportRow], filter: ImportRowFilter) -> Vec<&ImportRow> {
    rows.iter().filter(|row| filter.matches(row)).collect()
}
