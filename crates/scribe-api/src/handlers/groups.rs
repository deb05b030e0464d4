//! Group directory handlers

use axum::{
    extract::{Path, State},
    Json,
};
use scribe_service::{GroupResponse, GroupService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Group directory listing
///
/// GET /groups
pub async fn list_groups(State(state): State<AppState>) -> ApiResult<Json<Vec<GroupResponse>>> {
    let service = GroupService::new(state.service_context());
    let groups = service.list().await?;
    Ok(Json(groups))
}

/// One group by slug
///
/// GET /groups/{slug}
pub async fn get_group(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<GroupResponse>> {
    let service = GroupService::new(state.service_context());
    let group = service.get(&slug).await?;
    Ok(Json(group))
}
