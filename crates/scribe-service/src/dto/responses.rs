//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// Post or comment author as shown in bylines
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

// ============================================================================
// Group Responses
// ============================================================================

/// Full group response (directory listing)
#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// Group reference embedded in a post
#[derive(Debug, Clone, Serialize)]
pub struct GroupRefResponse {
    pub slug: String,
    pub title: String,
}

// ============================================================================
// Post Responses
// ============================================================================

/// A post as rendered in feeds and post pages
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author: AuthorResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupRefResponse>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Post page: the post together with its comments, newest first
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
}

/// One feed page
#[derive(Debug, Serialize)]
pub struct FeedPageResponse {
    pub items: Vec<PostResponse>,
    pub page: i64,
    pub total_pages: i64,
    pub total_count: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// A comment as rendered under a post
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub author: AuthorResponse,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Profile Responses
// ============================================================================

/// Profile page: the user, a page of their posts, and follow state
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: AuthorResponse,
    pub joined_at: DateTime<Utc>,
    pub posts: FeedPageResponse,
    pub post_count: i64,
    pub follower_count: i64,
    pub following_count: i64,
    /// Whether the viewer follows this user; always false for anonymous viewers
    pub is_following: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
    pub cache: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool, cache: bool) -> Self {
        Self {
            ready: database && cache,
            database,
            cache,
        }
    }
}
