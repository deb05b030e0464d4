//! Home feed caching

mod home_feed;

pub use home_feed::RedisHomeFeedCache;
