//! Offset/limit pagination for list endpoints.
//!
//! `offset` and `limit` travel together: a request supplies both or neither.
//! Supplying only one is rejected rather than silently defaulted.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::query::{QueryParams, PARAM_LIMIT, PARAM_OFFSET};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Offset used when the request carries no pagination parameters.
pub const DEFAULT_OFFSET: i64 = 0;

/// Limit used when the request carries no pagination parameters.
pub const DEFAULT_LIMIT: i64 = 100;

/// Smallest accepted limit.
pub const MIN_LIMIT: i64 = 1;

/// Largest accepted limit.
pub const MAX_LIMIT: i64 = 1000;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A validated offset/limit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    pub offset: i64,
    pub limit: i64,
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationRequest {
    /// Parse the `offset` and `limit` parameters out of a query lookup.
    pub fn from_query<Q: QueryParams + ?Sized>(params: &Q) -> Result<Self, CoreError> {
        parse_pagination(params.get_param(PARAM_OFFSET), params.get_param(PARAM_LIMIT))
    }

    /// Index range this page covers in a listing of `len` items.
    ///
    /// Empty when the offset lies past the end.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = usize::try_from(self.offset).unwrap_or(usize::MAX).min(len);
        let end = start
            .saturating_add(usize::try_from(self.limit).unwrap_or(0))
            .min(len);
        start..end
    }
}

/// Parse raw `offset` / `limit` query values.
///
/// Empty strings count as absent. Checks run in order: offset parse, offset
/// sign, limit parse, limit lower bound, limit upper bound.
pub fn parse_pagination(
    raw_offset: Option<&str>,
    raw_limit: Option<&str>,
) -> Result<PaginationRequest, CoreError> {
    let raw_offset = raw_offset.filter(|s| !s.is_empty());
    let raw_limit = raw_limit.filter(|s| !s.is_empty());

    let (raw_offset, raw_limit) = match (raw_offset, raw_limit) {
        (None, None) => return Ok(PaginationRequest::default()),
        (None, Some(_)) => {
            return Err(CoreError::Validation(
                "The parameter 'offset' is required when providing a limit".to_string(),
            ))
        }
        (Some(_), None) => {
            return Err(CoreError::Validation(
                "The parameter 'limit' is required when providing a offset".to_string(),
            ))
        }
        (Some(offset), Some(limit)) => (offset, limit),
    };

    let offset: i64 = raw_offset
        .parse()
        .map_err(|_| CoreError::Validation("Invalid offset parameter".to_string()))?;
    if offset < 0 {
        return Err(CoreError::Validation("Offset must be positive".to_string()));
    }

    let limit: i64 = raw_limit
        .parse()
        .map_err(|_| CoreError::Validation("Invalid limit parameter".to_string()))?;
    if limit < MIN_LIMIT {
        return Err(CoreError::Validation(
            "Limit must be greater than 1".to_string(),
        ));
    }
    if limit > MAX_LIMIT {
        return Err(CoreError::Validation(format!(
            "Limit cannot be greater than {MAX_LIMIT}"
        )));
    }

    Ok(PaginationRequest { offset, limit })
}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// Pagination metadata returned alongside a page of results.
///
/// Clients request the following page with `offset = next_offset`; once
/// `next_offset == total` there is nothing left to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub next_offset: i64,
}

impl Pagination {
    pub fn new(request: PaginationRequest, total: i64) -> Self {
        let next_offset = request
            .offset
            .saturating_add(request.limit)
            .min(total)
            .max(request.offset);
        Self {
            total,
            limit: request.limit,
            offset: request.offset,
            next_offset,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
