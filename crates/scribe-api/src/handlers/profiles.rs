//! Profile and follow handlers

use axum::{
    extract::{Path, State},
    Json,
};
use scribe_service::{FollowService, ProfileResponse, ProfileService};

use crate::extractors::{AuthUser, OptionalAuthUser, PageQuery};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Profile page: the user, a page of their posts, and follow state
///
/// GET /users/{username}?page=N
pub async fn get_profile(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(username): Path<String>,
    page: PageQuery,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service
        .profile(viewer.user_id(), &username, page.page)
        .await?;
    Ok(Json(response))
}

/// Follow an author; repeating it, or following yourself, changes nothing
///
/// PUT /users/{username}/follow
pub async fn follow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<NoContent> {
    let service = FollowService::new(state.service_context());
    service.follow(Some(auth.user_id), &username).await?;
    Ok(NoContent)
}

/// Unfollow an author; a missing edge is a no-op
///
/// DELETE /users/{username}/follow
pub async fn unfollow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<NoContent> {
    let service = FollowService::new(state.service_context());
    service.unfollow(Some(auth.user_id), &username).await?;
    Ok(NoContent)
}
