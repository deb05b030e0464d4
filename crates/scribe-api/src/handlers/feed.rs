//! Feed handlers
//!
//! Endpoints for the home, group, and following feeds.

use axum::{
    extract::{Path, State},
    Json,
};
use scribe_service::{FeedPageResponse, FeedService};

use crate::extractors::{AuthUser, PageQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Home feed: every post, newest first
///
/// GET /posts?page=N
pub async fn home_feed(
    State(state): State<AppState>,
    page: PageQuery,
) -> ApiResult<Json<FeedPageResponse>> {
    let service = FeedService::new(state.service_context());
    let feed = service.home(page.page).await?;
    Ok(Json(feed))
}

/// Group feed: posts tagged with the group addressed by slug
///
/// GET /groups/{slug}/posts?page=N
pub async fn group_feed(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    page: PageQuery,
) -> ApiResult<Json<FeedPageResponse>> {
    let service = FeedService::new(state.service_context());
    let feed = service.group(&slug, page.page).await?;
    Ok(Json(feed))
}

/// Following feed: posts by authors the viewer follows
///
/// GET /feed/following?page=N
pub async fn following_feed(
    State(state): State<AppState>,
    auth: AuthUser,
    page: PageQuery,
) -> ApiResult<Json<FeedPageResponse>> {
    let service = FeedService::new(state.service_context());
    let feed = service.following(Some(auth.user_id), page.page).await?;
    Ok(Json(feed))
}
