//! Post entity - a text post, optionally tagged with a group and carrying an image

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Post entity
///
/// `created_at` is set once at creation and never changes; edits rewrite
/// text, group, and image only, so a post keeps its place in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub group_id: Option<Snowflake>,
    pub text: String,
    /// Stored media path, present only when an upload decoded successfully
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(id: Snowflake, author_id: Snowflake, text: String) -> Self {
        Self {
            id,
            author_id,
            group_id: None,
            text,
            image: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a group tag
    pub fn with_group(mut self, group_id: Snowflake) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Attach a stored image path
    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    /// Check whether the text is empty after trimming whitespace
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Check whether this post belongs to the given author
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Check whether the post carries an image
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Clear the group tag (used when the tagged group is deleted)
    pub fn detach_group(&mut self) {
        self.group_id = None;
    }
}
