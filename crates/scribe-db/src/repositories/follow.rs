//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use scribe_core::entities::Follow;
use scribe_core::error::DomainError;
use scribe_core::traits::{FollowRepository, RepoResult};
use scribe_core::value_objects::Snowflake;

use super::error::map_db_error;

/// PostgreSQL implementation of FollowRepository
///
/// The (user_id, author_id) pair is unique; `ON CONFLICT DO NOTHING`
/// resolves duplicate-insert races without locking, so two concurrent
/// follows converge to exactly one edge.
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        // The store-level invariant; callers normally skip self-follows
        // before reaching here.
        if follow.is_self_follow() {
            return Err(DomainError::SelfFollow);
        }

        sqlx::query(
            r#"
            INSERT INTO follows (user_id, author_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, author_id) DO NOTHING
            "#,
        )
        .bind(follow.user_id.into_inner())
        .bind(follow.author_id.into_inner())
        .bind(follow.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<()> {
        // Deleting a missing edge is a no-op by contract
        sqlx::query("DELETE FROM follows WHERE user_id = $1 AND author_id = $2")
            .bind(user_id.into_inner())
            .bind(author_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE user_id = $1 AND author_id = $2)",
        )
        .bind(user_id.into_inner())
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists.0)
    }

    #[instrument(skip(self))]
    async fn authors_followed_by(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let rows: Vec<(i64,)> =
            sqlx::query_as("SELECT author_id FROM follows WHERE user_id = $1")
                .bind(user_id.into_inner())
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(rows.into_iter().map(|(id,)| Snowflake::new(id)).collect())
    }

    #[instrument(skip(self))]
    async fn follower_count(&self, author_id: Snowflake) -> RepoResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM follows WHERE author_id = $1")
            .bind(author_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.0)
    }

    #[instrument(skip(self))]
    async fn following_count(&self, user_id: Snowflake) -> RepoResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM follows WHERE user_id = $1")
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.0)
    }
}
