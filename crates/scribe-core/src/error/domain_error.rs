//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Unknown username: {0}")]
    UnknownUsername(String),

    #[error("Group not found: {0}")]
    GroupNotFound(Snowflake),

    #[error("Unknown group slug: {0}")]
    UnknownGroupSlug(String),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Text must not be empty or whitespace-only")]
    EmptyText,

    #[error("Upload is not a decodable image: {0}")]
    InvalidImage(String),

    #[error("Text too long: max {max} characters")]
    TextTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the post's author may modify it")]
    NotPostAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Group slug already in use: {0}")]
    SlugTaken(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("A user cannot follow themselves")]
    SelfFollow,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Media storage error: {0}")]
    MediaError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::UnknownUsername(_) => "UNKNOWN_USER",
            Self::GroupNotFound(_) | Self::UnknownGroupSlug(_) => "UNKNOWN_GROUP",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::EmptyText => "EMPTY_TEXT",
            Self::InvalidImage(_) => "INVALID_IMAGE",
            Self::TextTooLong { .. } => "TEXT_TOO_LONG",

            // Authorization
            Self::NotPostAuthor => "NOT_POST_AUTHOR",

            // Conflict
            Self::SlugTaken(_) => "SLUG_TAKEN",

            // Business Rules
            Self::SelfFollow => "SELF_FOLLOW",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::MediaError(_) => "MEDIA_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UnknownUsername(_)
                | Self::GroupNotFound(_)
                | Self::UnknownGroupSlug(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyText | Self::InvalidImage(_) | Self::TextTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPostAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::SlugTaken(_))
    }
}
