//! Post handlers
//!
//! Endpoints for post authoring and the post page. An edit or delete by
//! a non-author answers with a redirect to the post's canonical view
//! rather than an explicit forbidden error.

use axum::{
    extract::{Path, State},
    Json,
};
use scribe_core::Snowflake;
use scribe_service::{
    CreatePostRequest, PostDetailResponse, PostResponse, PostService, UpdatePostRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{forbidden_to_redirect, ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Canonical view of a post
fn canonical_post_path(username: &str, post_id: Snowflake) -> String {
    format!("/api/v1/users/{username}/posts/{post_id}")
}

fn parse_post_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
}

/// Create post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.create_post(Some(auth.user_id), request).await?;
    Ok(Created(Json(response)))
}

/// Post page: the post and its comments
///
/// GET /users/{username}/posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    Path((username, post_id)): Path<(String, String)>,
) -> ApiResult<Json<PostDetailResponse>> {
    let post_id = parse_post_id(&post_id)?;

    let service = PostService::new(state.service_context());
    let response = service.get_post(&username, post_id).await?;
    Ok(Json(response))
}

/// Edit post
///
/// PATCH /users/{username}/posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((username, post_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = parse_post_id(&post_id)?;

    let service = PostService::new(state.service_context());
    let response = service
        .edit_post(Some(auth.user_id), &username, post_id, request)
        .await
        .map_err(|e| forbidden_to_redirect(e, canonical_post_path(&username, post_id)))?;
    Ok(Json(response))
}

/// Delete post (comments go with it)
///
/// DELETE /users/{username}/posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((username, post_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let post_id = parse_post_id(&post_id)?;

    let service = PostService::new(state.service_context());
    service
        .delete_post(Some(auth.user_id), &username, post_id)
        .await
        .map_err(|e| forbidden_to_redirect(e, canonical_post_path(&username, post_id)))?;
    Ok(NoContent)
}
