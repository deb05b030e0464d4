//! Follow entity <-> model mapper

use scribe_core::entities::Follow;
use scribe_core::value_objects::Snowflake;

use crate::models::FollowModel;

impl From<FollowModel> for Follow {
    fn from(model: FollowModel) -> Self {
        Follow {
            user_id: Snowflake::new(model.user_id),
            author_id: Snowflake::new(model.author_id),
            created_at: model.created_at,
        }
    }
}
