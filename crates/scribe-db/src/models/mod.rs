//! Database models (`FromRow` row structs)

mod comment;
mod follow;
mod group;
mod post;
mod user;

pub use comment::CommentModel;
pub use follow::FollowModel;
pub use group::GroupModel;
pub use post::PostModel;
pub use user::UserModel;
