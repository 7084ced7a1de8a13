//! Query string extractors for list endpoints.
//!
//! Each extractor decodes the query string into ordered key-value pairs and
//! hands them to the matching `importer_core` parser, so validation rules live
//! in one place and rejections surface as [`AppError`] (400 with the message).
//! When a key repeats, the first occurrence wins.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use importer_core::filter::ImportRowFilter;
use importer_core::pagination::PaginationRequest;

use crate::error::AppError;

/// Validated `?offset=&limit=` pair. Both or neither must be supplied.
#[derive(Debug, Clone, Copy)]
pub struct PaginationQuery(pub PaginationRequest);

/// Validated `?filter=all|valid|error` selection.
#[derive(Debug, Clone, Copy)]
pub struct FilterQuery(pub ImportRowFilter);

fn decode_query(parts: &Parts) -> Result<Vec<(String, String)>, AppError> {
    Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

impl<S> FromRequestParts<S> for PaginationQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = decode_query(parts)?;
        Ok(PaginationQuery(PaginationRequest::from_query(&params[..])?))
    }
}

impl<S> FromRequestParts<S> for FilterQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = decode_query(parts)?;
        Ok(FilterQuery(ImportRowFilter::from_query(&params[..])?))
    }
}
