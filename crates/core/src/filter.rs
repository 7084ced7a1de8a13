//! Row filter for import review listings (`?filter=all|valid|error`).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::query::{QueryParams, PARAM_FILTER};

/// Which rows of an import a listing returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportRowFilter {
    #[default]
    All,
    Valid,
    Error,
}

impl ImportRowFilter {
    /// Accepted filter values, lowercase.
    pub const ALL: &'static [&'static str] = &["all", "valid", "error"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Valid => "valid",
            Self::Error => "error",
        }
    }

    /// Parse the `filter` parameter out of a query lookup.
    pub fn from_query<Q: QueryParams + ?Sized>(params: &Q) -> Result<Self, CoreError> {
        parse_import_row_filter(params.get_param(PARAM_FILTER))
    }
}

impl std::fmt::Display for ImportRowFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a raw `filter` value.
///
/// Matching is case-insensitive; surrounding whitespace is not trimmed.
/// Absent or empty selects [`ImportRowFilter::All`].
pub fn parse_import_row_filter(raw: Option<&str>) -> Result<ImportRowFilter, CoreError> {
    match raw.unwrap_or_default().to_lowercase().as_str() {
        "" | "all" => Ok(ImportRowFilter::All),
        "valid" => Ok(ImportRowFilter::Valid),
        "error" => Ok(ImportRowFilter::Error),
        _ => Err(CoreError::Validation(
            "The parameter 'filter' is invalid".to_string(),
        )),
    }
}
