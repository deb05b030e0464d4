//! # scribe-db
//!
//! Database layer implementing the `scribe-core` repository traits with
//! PostgreSQL via SQLx. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgFollowRepository, PgGroupRepository, PgPostRepository, PgUserRepository,
};
