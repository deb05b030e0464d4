//! Feed assembly
//!
//! A feed is a pure read: filter posts by scope, order by creation time
//! (ties by id), slice by page number. Out-of-range pages clamp to the
//! nearest valid page. The home scope reads through the short-TTL cache
//! when one is configured; reads inside the TTL window may observe a
//! pre-creation snapshot by design.

use tracing::{instrument, warn};

use scribe_core::entities::Post;
use scribe_core::traits::FeedScope;
use scribe_core::value_objects::{Page, Paginator, Snowflake};

use crate::dto::{FeedPageResponse, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::post::build_post_response;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The home feed: every post, cached for a short window
    #[instrument(skip(self))]
    pub async fn home(&self, page: i64) -> ServiceResult<FeedPageResponse> {
        let slice = match self.ctx.feed_cache() {
            Some(cache) => match cache.get_home_page(page).await {
                Ok(Some(cached)) => cached,
                Ok(None) => {
                    let fresh = self.assemble(FeedScope::Home, page).await?;
                    if let Err(e) = cache.put_home_page(page, &fresh).await {
                        warn!(error = %e, "Failed to cache home feed page");
                    }
                    fresh
                }
                Err(e) => {
                    // The cache is advisory; fall through to a fresh read
                    warn!(error = %e, "Home feed cache read failed");
                    self.assemble(FeedScope::Home, page).await?
                }
            },
            None => self.assemble(FeedScope::Home, page).await?,
        };

        self.into_response(slice).await
    }

    /// Posts tagged with the group addressed by slug
    #[instrument(skip(self))]
    pub async fn group(&self, slug: &str, page: i64) -> ServiceResult<FeedPageResponse> {
        let group = self
            .ctx
            .group_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Group", slug))?;

        let slice = self.assemble(FeedScope::Group(group.id), page).await?;
        self.into_response(slice).await
    }

    /// Posts by the author addressed by username
    #[instrument(skip(self))]
    pub async fn author(&self, username: &str, page: i64) -> ServiceResult<FeedPageResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))?;

        let slice = self.assemble(FeedScope::Author(author.id), page).await?;
        self.into_response(slice).await
    }

    /// Posts by every author the viewer follows; an empty follow set
    /// yields a valid empty page
    #[instrument(skip(self))]
    pub async fn following(
        &self,
        viewer: Option<Snowflake>,
        page: i64,
    ) -> ServiceResult<FeedPageResponse> {
        let viewer_id = viewer.ok_or(ServiceError::Unauthenticated)?;

        let slice = self.assemble(FeedScope::FollowedBy(viewer_id), page).await?;
        self.into_response(slice).await
    }

    /// Count, clamp, fetch: the shared assembly path for every scope
    pub(crate) async fn assemble(
        &self,
        scope: FeedScope,
        page: i64,
    ) -> ServiceResult<Page<Post>> {
        let total = self.ctx.post_repo().count(scope).await?;
        let paginator = Paginator::new(total, self.ctx.page_size());
        let number = paginator.clamp_page(page);

        let posts = self
            .ctx
            .post_repo()
            .list(scope, paginator.page_size(), paginator.offset(number))
            .await?;

        Ok(Page::new(posts, number, &paginator))
    }

    /// Resolve authors, groups, and comment counts for a page of posts
    pub(crate) async fn into_response(
        &self,
        slice: Page<Post>,
    ) -> ServiceResult<FeedPageResponse> {
        let mut items: Vec<PostResponse> = Vec::with_capacity(slice.items.len());
        for post in slice.items {
            items.push(build_post_response(self.ctx, post).await?);
        }

        Ok(FeedPageResponse {
            items,
            page: slice.number,
            total_pages: slice.total_pages,
            total_count: slice.total_count,
        })
    }
}
