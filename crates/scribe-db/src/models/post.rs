//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub author_id: i64,
    pub group_id: Option<i64>,
    pub text: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PostModel {
    /// Check if the post carries an image
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Check if the post is tagged with a group
    #[inline]
    pub fn has_group(&self) -> bool {
        self.group_id.is_some()
    }
}
