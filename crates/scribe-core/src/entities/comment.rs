//! Comment entity - immutable reply attached to a post

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Comment entity
///
/// Comments cannot be edited once created and are deleted together with
/// their post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub author_id: Snowflake,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Snowflake, post_id: Snowflake, author_id: Snowflake, text: String) -> Self {
        Self {
            id,
            post_id,
            author_id,
            text,
            created_at: Utc::now(),
        }
    }

    /// Check whether the text is empty after trimming whitespace
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
