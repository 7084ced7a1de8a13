//! Domain logic for the importer admin service.
//!
//! Query parsing, validation helpers and row filtering live here with no web
//! or storage dependencies so both the API crate and tooling can use them.

pub mod error;
pub mod filter;
pub mod import_row;
pub mod pagination;
pub mod query;
pub mod template_column;
pub mod types;
