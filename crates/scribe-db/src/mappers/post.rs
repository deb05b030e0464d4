//! Post entity <-> model mapper

use scribe_core::entities::Post;
use scribe_core::value_objects::Snowflake;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            group_id: model.group_id.map(Snowflake::new),
            text: model.text,
            image: model.image,
            created_at: model.created_at,
        }
    }
}
