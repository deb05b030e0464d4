//! Home feed page cache backed by Redis.
//!
//! Pages are stored under version-stamped keys
//! (`feed:home:v{version}:p{page}`) with a short TTL. Invalidation bumps
//! the version counter, orphaning every key of the previous version
//! without blocking readers; orphans fall out on their own TTL. Reads
//! inside the TTL window may observe a pre-creation snapshot, which is
//! the documented staleness trade-off.

use async_trait::async_trait;

use scribe_core::entities::Post;
use scribe_core::error::DomainError;
use scribe_core::traits::FeedCache;
use scribe_core::value_objects::Page;

use crate::pool::RedisPool;

/// Key prefix for home feed pages
const HOME_FEED_PREFIX: &str = "feed:home";

/// Key of the version counter used for invalidation
const HOME_FEED_VERSION_KEY: &str = "feed:home:version";

/// Default TTL for cached pages (seconds)
const DEFAULT_TTL: u64 = 20;

/// Redis-backed home feed cache
#[derive(Clone)]
pub struct RedisHomeFeedCache {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RedisHomeFeedCache {
    /// Create a cache with the default TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_TTL,
        }
    }

    /// Create a cache with a custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate the Redis key for a page under the given version
    fn key(version: i64, page: i64) -> String {
        format!("{HOME_FEED_PREFIX}:v{version}:p{page}")
    }

    async fn current_version(&self) -> Result<i64, DomainError> {
        self.pool
            .get_counter(HOME_FEED_VERSION_KEY)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }
}

#[async_trait]
impl FeedCache for RedisHomeFeedCache {
    async fn get_home_page(&self, page: i64) -> Result<Option<Page<Post>>, DomainError> {
        let version = self.current_version().await?;
        self.pool
            .get_value(&Self::key(version, page))
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }

    async fn put_home_page(
        &self,
        requested_page: i64,
        page: &Page<Post>,
    ) -> Result<(), DomainError> {
        let version = self.current_version().await?;
        self.pool
            .set(
                &Self::key(version, requested_page),
                page,
                Some(self.ttl_seconds),
            )
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        tracing::debug!(
            page = requested_page,
            version = version,
            ttl = self.ttl_seconds,
            "Cached home feed page"
        );

        Ok(())
    }

    async fn invalidate_home(&self) -> Result<(), DomainError> {
        let version = self
            .pool
            .incr(HOME_FEED_VERSION_KEY)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        tracing::debug!(version = version, "Invalidated home feed cache");

        Ok(())
    }
}
