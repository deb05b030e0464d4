//! Follow graph
//!
//! Follow and unfollow are idempotent: repeating either leaves the graph
//! in the same state as doing it once. Self-follow and duplicate-follow
//! are silent no-ops rather than errors, matching how the profile page
//! behaves (the follow button simply leads back to the profile).

use tracing::{info, instrument};

use scribe_core::entities::{Follow, User};
use scribe_core::value_objects::Snowflake;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Follow the author addressed by username
    #[instrument(skip(self))]
    pub async fn follow(&self, viewer: Option<Snowflake>, username: &str) -> ServiceResult<()> {
        let user_id = viewer.ok_or(ServiceError::Unauthenticated)?;
        let author = self.resolve_author(username).await?;

        // Self-follow and duplicate-follow end exactly where they started
        if user_id == author.id || self.ctx.follow_repo().exists(user_id, author.id).await? {
            return Ok(());
        }

        self.ctx
            .follow_repo()
            .create(&Follow::new(user_id, author.id))
            .await?;

        info!(user_id = %user_id, author_id = %author.id, "Follow edge created");

        Ok(())
    }

    /// Unfollow the author addressed by username
    #[instrument(skip(self))]
    pub async fn unfollow(&self, viewer: Option<Snowflake>, username: &str) -> ServiceResult<()> {
        let user_id = viewer.ok_or(ServiceError::Unauthenticated)?;
        let author = self.resolve_author(username).await?;

        if user_id == author.id || !self.ctx.follow_repo().exists(user_id, author.id).await? {
            return Ok(());
        }

        self.ctx.follow_repo().delete(user_id, author.id).await?;

        info!(user_id = %user_id, author_id = %author.id, "Follow edge removed");

        Ok(())
    }

    /// Check whether the viewer follows the author
    #[instrument(skip(self))]
    pub async fn is_following(
        &self,
        viewer: Snowflake,
        author_id: Snowflake,
    ) -> ServiceResult<bool> {
        Ok(self.ctx.follow_repo().exists(viewer, author_id).await?)
    }

    /// Ids of every author the user follows
    #[instrument(skip(self))]
    pub async fn followed_authors(&self, user_id: Snowflake) -> ServiceResult<Vec<Snowflake>> {
        Ok(self.ctx.follow_repo().authors_followed_by(user_id).await?)
    }

    async fn resolve_author(&self, username: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))
    }
}
