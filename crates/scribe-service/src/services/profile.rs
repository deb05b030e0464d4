//! Profile assembly
//!
//! A profile page shows the user, a page of their posts, their counts,
//! and whether the viewer follows them. Anonymous viewers always see
//! `is_following: false`.

use tracing::instrument;

use scribe_core::traits::FeedScope;
use scribe_core::value_objects::Snowflake;

use crate::dto::{AuthorResponse, ProfileResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::feed::FeedService;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Assemble the profile page for the user addressed by username
    #[instrument(skip(self))]
    pub async fn profile(
        &self,
        viewer: Option<Snowflake>,
        username: &str,
        page: i64,
    ) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))?;

        let feed = FeedService::new(self.ctx);
        let slice = feed.assemble(FeedScope::Author(user.id), page).await?;
        let posts = feed.into_response(slice).await?;

        let follower_count = self.ctx.follow_repo().follower_count(user.id).await?;
        let following_count = self.ctx.follow_repo().following_count(user.id).await?;

        let is_following = match viewer {
            Some(viewer_id) => self.ctx.follow_repo().exists(viewer_id, user.id).await?,
            None => false,
        };

        Ok(ProfileResponse {
            user: AuthorResponse::from(&user),
            joined_at: user.created_at,
            post_count: posts.total_count,
            posts,
            follower_count,
            following_count,
            is_following,
        })
    }
}
