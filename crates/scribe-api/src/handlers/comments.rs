//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use scribe_service::{CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Add a comment to a post
///
/// POST /users/{username}/posts/{post_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((username, post_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = CommentService::new(state.service_context());
    let response = service
        .add_comment(Some(auth.user_id), &username, post_id, request)
        .await?;
    Ok(Created(Json(response)))
}
