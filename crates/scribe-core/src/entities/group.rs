//! Group entity - a community that posts can be tagged with

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Group entity
///
/// Deleting a group never deletes its posts; their group tag is cleared
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: Snowflake,
    pub title: String,
    /// URL-safe unique identifier used to address the group feed
    pub slug: String,
    pub description: String,
}

impl Group {
    /// Create a new Group
    pub fn new(id: Snowflake, title: String, slug: String, description: String) -> Self {
        Self {
            id,
            title,
            slug,
            description,
        }
    }
}
