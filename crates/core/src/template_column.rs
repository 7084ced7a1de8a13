//! Template column validation: data type vocabulary and column key format.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Column keys are lowercase letters, digits and underscores.
static COLUMN_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").expect("valid regex"));

/// Data type a template column's values must conform to.
///
/// Deserialization goes through [`TemplateColumnDataType::parse`], so input is
/// trimmed and case-folded and a blank value selects `String`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TemplateColumnDataType {
    #[default]
    String,
    Number,
    Boolean,
    Date,
}

impl TemplateColumnDataType {
    /// Parse a user-supplied data type. Blank input selects `String`.
    pub fn parse(data_type: &str) -> Result<Self, CoreError> {
        match data_type.trim().to_lowercase().as_str() {
            "" | "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            _ => Err(CoreError::Validation(format!(
                "The data type {data_type} is invalid"
            ))),
        }
    }
}

impl TryFrom<String> for TemplateColumnDataType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Check whether `key` is usable as a template column key.
pub fn is_valid_template_column_key(key: &str) -> bool {
    COLUMN_KEY_RE.is_match(key)
}

/// Input for creating a template column.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTemplateColumn {
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub data_type: TemplateColumnDataType,
    pub description: Option<String>,
}

impl NewTemplateColumn {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Column name cannot be empty".to_string(),
            ));
        }
        if !is_valid_template_column_key(&self.key) {
            return Err(CoreError::Validation(format!(
                "The column key '{}' is invalid. Keys may only contain lowercase letters, numbers, and underscores",
                self.key
            )));
        }
        Ok(())
    }
}
