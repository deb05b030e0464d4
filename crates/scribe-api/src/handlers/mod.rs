//! Request handlers

pub mod comments;
pub mod feed;
pub mod groups;
pub mod health;
pub mod posts;
pub mod profiles;

use crate::response::ApiError;

/// Fallback for unmatched routes: a generic not-found body
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
