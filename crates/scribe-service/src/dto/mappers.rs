//! Entity → response DTO mappers

use scribe_core::entities::{Group, User};

use super::responses::{AuthorResponse, GroupRefResponse, GroupResponse};

impl From<&User> for AuthorResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            display_name: user.display_name.clone(),
        }
    }
}

impl From<&Group> for GroupRefResponse {
    fn from(group: &Group) -> Self {
        Self {
            slug: group.slug.clone(),
            title: group.title.clone(),
        }
    }
}

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.to_string(),
            title: group.title.clone(),
            slug: group.slug.clone(),
            description: group.description.clone(),
        }
    }
}
