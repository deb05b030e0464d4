//! Application services

mod comment;
mod context;
mod error;
mod feed;
mod follow;
mod group;
mod media;
mod post;
mod profile;

pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use follow::FollowService;
pub use group::GroupService;
pub use media::{validate_image, MediaStore};
pub use post::PostService;
pub use profile::ProfileService;
