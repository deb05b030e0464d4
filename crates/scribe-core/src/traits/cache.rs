//! Feed cache port
//!
//! The home feed may be served from a short-lived cache. The cache is
//! advisory: reads inside the TTL window can observe a pre-creation
//! snapshot, and a cache failure must never fail the request.

use async_trait::async_trait;

use crate::entities::Post;
use crate::error::DomainError;
use crate::value_objects::Page;

/// Short-TTL cache over home feed pages
#[async_trait]
pub trait FeedCache: Send + Sync {
    /// Fetch a cached home feed page, if present and unexpired
    async fn get_home_page(&self, page: i64) -> Result<Option<Page<Post>>, DomainError>;

    /// Store a home feed page under the configured TTL
    async fn put_home_page(&self, requested_page: i64, page: &Page<Post>)
        -> Result<(), DomainError>;

    /// Drop all cached home feed pages (called on post creation)
    async fn invalidate_home(&self) -> Result<(), DomainError>;
}
