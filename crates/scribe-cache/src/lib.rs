//! # scribe-cache
//!
//! Redis caching layer for the home feed.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Home Feed Cache**: short-TTL pages of the home feed, invalidated on
//!   every post creation via a version-stamped key scheme

pub mod feed;
pub mod pool;

// Re-export pool types
pub use pool::{create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool};

// Re-export feed cache types
pub use feed::RedisHomeFeedCache;
