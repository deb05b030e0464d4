//! # scribe-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AuthorResponse, CommentResponse, CreateCommentRequest, CreatePostRequest, FeedPageResponse,
    GroupRefResponse, GroupResponse, HealthResponse, PostDetailResponse, PostResponse,
    ProfileResponse, ReadinessResponse, UpdatePostRequest,
};
pub use services::{
    CommentService, FeedService, FollowService, GroupService, MediaStore, PostService,
    ProfileService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
