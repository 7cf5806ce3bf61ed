//! Pagination extractor
//!
//! Extracts offset-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageParams {
    /// Number of leading records to skip
    #[serde(default)]
    pub skip: Option<i64>,
    /// Maximum number of records to return
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated pagination parameters.
///
/// `skip` and `limit` must be non-negative; `limit` has no upper bound.
#[derive(Debug, Clone)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TryFrom<PageParams> for Page {
    type Error = ApiError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        let skip = params.skip.unwrap_or(0);
        if skip < 0 {
            return Err(ApiError::invalid_query("'skip' must be non-negative"));
        }

        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        if limit < 0 {
            return Err(ApiError::invalid_query("'limit' must be non-negative"));
        }

        Ok(Page { skip, limit })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Page::try_from(params)
    }
}
