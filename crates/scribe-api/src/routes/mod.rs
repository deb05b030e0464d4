//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{self, comments, feed, groups, health, posts, profiles};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
        // Anything else is a generic not-found
        .fallback(handlers::not_found)
}

/// Health check routes (exported separately to bypass API middleware)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(feed_routes())
        .merge(group_routes())
        .merge(user_routes())
}

/// Feed and post authoring routes
fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(feed::home_feed).post(posts::create_post))
        .route("/feed/following", get(feed::following_feed))
}

/// Group directory routes
fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/groups", get(groups::list_groups))
        .route("/groups/:slug", get(groups::get_group))
        .route("/groups/:slug/posts", get(feed::group_feed))
}

/// Profile, follow, and post-page routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:username", get(profiles::get_profile))
        .route(
            "/users/:username/follow",
            put(profiles::follow).delete(profiles::unfollow),
        )
        .route(
            "/users/:username/posts/:post_id",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/users/:username/posts/:post_id/comments",
            post(comments::add_comment),
        )
}
