//! Comment workflow
//!
//! Comments follow the same two-outcome shape as posts but have no edit
//! state: once created they are immutable, and they disappear with their
//! post. Anonymous submissions are rejected here, before the store is
//! touched.

use tracing::{info, instrument};

use scribe_core::entities::Comment;
use scribe_core::error::DomainError;
use scribe_core::value_objects::Snowflake;

use crate::dto::{AuthorResponse, CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::post::PostService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a post addressed by author username and post id
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        viewer: Option<Snowflake>,
        username: &str,
        post_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        // Anonymous callers never reach the store
        let author_id = viewer.ok_or(ServiceError::Unauthenticated)?;

        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", author_id.to_string()))?;

        let (_, post) = PostService::new(self.ctx)
            .find_addressed_post(username, post_id)
            .await?;

        if request.text.trim().is_empty() {
            return Err(ServiceError::rejected(DomainError::EmptyText, &request));
        }

        let comment = Comment::new(self.ctx.generate_id(), post.id, author_id, request.text);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post.id, "Comment created");

        Ok(CommentResponse {
            id: comment.id.to_string(),
            author: AuthorResponse::from(&author),
            text: comment.text,
            created_at: comment.created_at,
        })
    }
}
