//! Service context - dependency container for services
//!
//! Holds the repository and cache ports, the media store, and the id
//! generator needed by services.

use std::sync::Arc;

use scribe_core::traits::{
    CommentRepository, FeedCache, FollowRepository, GroupRepository, PostRepository,
    UserRepository,
};
use scribe_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};
use super::media::MediaStore;

/// Default feed page size
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Service context containing all dependencies
///
/// This is the dependency container passed to every service. The feed
/// cache is optional: without one, feeds are always assembled fresh.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    group_repo: Arc<dyn GroupRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    feed_cache: Option<Arc<dyn FeedCache>>,
    media_store: MediaStore,
    snowflake_generator: Arc<SnowflakeGenerator>,
    page_size: i64,
}

impl ServiceContext {
    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the group repository
    pub fn group_repo(&self) -> &dyn GroupRepository {
        self.group_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the feed cache, when one is configured
    pub fn feed_cache(&self) -> Option<&dyn FeedCache> {
        self.feed_cache.as_deref()
    }

    /// Get the media store
    pub fn media_store(&self) -> &MediaStore {
        &self.media_store
    }

    /// Feed page size
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("feed_cache", &self.feed_cache.is_some())
            .field("page_size", &self.page_size)
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    group_repo: Option<Arc<dyn GroupRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    feed_cache: Option<Arc<dyn FeedCache>>,
    media_store: Option<MediaStore>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    page_size: i64,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            group_repo: None,
            post_repo: None,
            comment_repo: None,
            follow_repo: None,
            feed_cache: None,
            media_store: None,
            snowflake_generator: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn group_repo(mut self, repo: Arc<dyn GroupRepository>) -> Self {
        self.group_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    /// Install a feed cache; without one, feeds are assembled fresh on
    /// every read
    pub fn feed_cache(mut self, cache: Arc<dyn FeedCache>) -> Self {
        self.feed_cache = Some(cache);
        self
    }

    pub fn media_store(mut self, store: MediaStore) -> Self {
        self.media_store = Some(store);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::internal("user_repo is required"))?,
            group_repo: self
                .group_repo
                .ok_or_else(|| ServiceError::internal("group_repo is required"))?,
            post_repo: self
                .post_repo
                .ok_or_else(|| ServiceError::internal("post_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::internal("comment_repo is required"))?,
            follow_repo: self
                .follow_repo
                .ok_or_else(|| ServiceError::internal("follow_repo is required"))?,
            feed_cache: self.feed_cache,
            media_store: self
                .media_store
                .ok_or_else(|| ServiceError::internal("media_store is required"))?,
            snowflake_generator: self
                .snowflake_generator
                .ok_or_else(|| ServiceError::internal("snowflake_generator is required"))?,
            page_size: self.page_size,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
