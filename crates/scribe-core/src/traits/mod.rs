//! Ports - repository and cache traits implemented by the infrastructure layers

mod cache;
mod repositories;

pub use cache::FeedCache;
pub use repositories::{
    CommentRepository, FeedScope, FollowRepository, GroupRepository, PostRepository, RepoResult,
    UserRepository,
};
