//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. They also implement `Serialize` so a rejected submission
//! can be echoed back to the caller unchanged.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(max = 10000, message = "Post text must be at most 10000 characters"))]
    pub text: String,

    /// Group tag (snowflake id as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Base64-encoded image upload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Update post request
///
/// A missing image keeps the stored one; a present image replaces it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(max = 10000, message = "Post text must be at most 10000 characters"))]
    pub text: String,

    /// Group tag (snowflake id as string); absent clears the tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Base64-encoded replacement image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(max = 2000, message = "Comment text must be at most 2000 characters"))]
    pub text: String,
}
