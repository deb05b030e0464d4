//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use scribe_core::entities::Post;
use scribe_core::traits::{FeedScope, PostRepository, RepoResult};
use scribe_core::value_objects::Snowflake;

use crate::models::PostModel;

use super::error::{map_db_error, post_not_found};

/// PostgreSQL implementation of PostRepository
///
/// All feed listings share the global ordering: `created_at DESC, id DESC`.
/// Snowflake ids are time-ordered, so the id tie-breaker equals insertion
/// order.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, group_id, text, image, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_by_author_and_id(
        &self,
        author_id: Snowflake,
        id: Snowflake,
    ) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, group_id, text, image, created_at
            FROM posts
            WHERE author_id = $1 AND id = $2
            "#,
        )
        .bind(author_id.into_inner())
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, scope: FeedScope, limit: i64, offset: i64) -> RepoResult<Vec<Post>> {
        let limit = limit.max(0);
        let offset = offset.max(0);

        let results = match scope {
            FeedScope::Home => {
                sqlx::query_as::<_, PostModel>(
                    r#"
                    SELECT id, author_id, group_id, text, image, created_at
                    FROM posts
                    ORDER BY created_at DESC, id DESC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            FeedScope::Group(group_id) => {
                sqlx::query_as::<_, PostModel>(
                    r#"
                    SELECT id, author_id, group_id, text, image, created_at
                    FROM posts
                    WHERE group_id = $1
                    ORDER BY created_at DESC, id DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(group_id.into_inner())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            FeedScope::Author(author_id) => {
                sqlx::query_as::<_, PostModel>(
                    r#"
                    SELECT id, author_id, group_id, text, image, created_at
                    FROM posts
                    WHERE author_id = $1
                    ORDER BY created_at DESC, id DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(author_id.into_inner())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            FeedScope::FollowedBy(user_id) => {
                sqlx::query_as::<_, PostModel>(
                    r#"
                    SELECT id, author_id, group_id, text, image, created_at
                    FROM posts
                    WHERE author_id IN (SELECT author_id FROM follows WHERE user_id = $1)
                    ORDER BY created_at DESC, id DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(user_id.into_inner())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, scope: FeedScope) -> RepoResult<i64> {
        let count: (i64,) = match scope {
            FeedScope::Home => {
                sqlx::query_as("SELECT COUNT(*) FROM posts")
                    .fetch_one(&self.pool)
                    .await
            }
            FeedScope::Group(group_id) => {
                sqlx::query_as("SELECT COUNT(*) FROM posts WHERE group_id = $1")
                    .bind(group_id.into_inner())
                    .fetch_one(&self.pool)
                    .await
            }
            FeedScope::Author(author_id) => {
                sqlx::query_as("SELECT COUNT(*) FROM posts WHERE author_id = $1")
                    .bind(author_id.into_inner())
                    .fetch_one(&self.pool)
                    .await
            }
            FeedScope::FollowedBy(user_id) => {
                sqlx::query_as(
                    "SELECT COUNT(*) FROM posts \
                     WHERE author_id IN (SELECT author_id FROM follows WHERE user_id = $1)",
                )
                .bind(user_id.into_inner())
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(count.0)
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, author_id, group_id, text, image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id.into_inner())
        .bind(post.author_id.into_inner())
        .bind(post.group_id.map(Snowflake::into_inner))
        .bind(&post.text)
        .bind(post.image.as_deref())
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        // created_at is immutable; only the editable fields are written.
        // Concurrent edits serialize on the row, last write wins.
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET text = $2, group_id = $3, image = $4
            WHERE id = $1
            "#,
        )
        .bind(post.id.into_inner())
        .bind(&post.text)
        .bind(post.group_id.map(Snowflake::into_inner))
        .bind(post.image.as_deref())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Comments go with the post. The FK cascades as well, but one
        // transaction keeps the two-step semantics explicit.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
