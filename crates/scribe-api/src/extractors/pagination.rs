//! Page-number extractor
//!
//! Extracts the `?page=` query parameter leniently: absent or
//! non-numeric values fall back to page 1. Out-of-range values pass
//! through; clamping to the last valid page happens in the feed
//! assembler, which knows the total count.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
struct PageParams {
    #[serde(default)]
    page: Option<String>,
}

/// Requested feed page (1-based, unclamped)
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    pub page: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl From<PageParams> for PageQuery {
    fn from(params: PageParams) -> Self {
        let page = params
            .page
            .as_deref()
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(1);
        Self { page }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(PageQuery::from(params))
    }
}
