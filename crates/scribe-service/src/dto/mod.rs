//! Data transfer objects

mod mappers;
mod requests;
mod responses;

pub use requests::{CreateCommentRequest, CreatePostRequest, UpdatePostRequest};
pub use responses::{
    AuthorResponse, CommentResponse, FeedPageResponse, GroupRefResponse, GroupResponse,
    HealthResponse, PostDetailResponse, PostResponse, ProfileResponse, ReadinessResponse,
};
