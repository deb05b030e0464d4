//! Follow edge - directed relation between a reader and an author

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Directed follow edge: `user_id` receives `author_id`'s posts in their
/// following feed. At most one edge exists per (user, author) pair and a
/// user never follows themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    pub user_id: Snowflake,
    pub author_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Create a new follow edge
    pub fn new(user_id: Snowflake, author_id: Snowflake) -> Self {
        Self {
            user_id,
            author_id,
            created_at: Utc::now(),
        }
    }

    /// Check whether this edge would be a self-follow
    #[inline]
    pub fn is_self_follow(&self) -> bool {
        self.user_id == self.author_id
    }
}
