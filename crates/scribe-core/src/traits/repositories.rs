//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. All feed listings share one global
//! ordering: creation time descending, ties broken by id descending.

use async_trait::async_trait;

use crate::entities::{Comment, Follow, Group, Post, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Filter predicate applied to the post set before pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedScope {
    /// Every post
    Home,
    /// Posts tagged with a group
    Group(Snowflake),
    /// Posts by one author
    Author(Snowflake),
    /// Posts by every author the viewer follows
    FollowedBy(Snowflake),
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Record a user announced by the identity provider
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Remove a user; their posts, comments, and follow edges go with them
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Group Repository
// ============================================================================

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Find group by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Group>>;

    /// Find group by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Group>>;

    /// List all groups ordered by title
    async fn list(&self) -> RepoResult<Vec<Group>>;

    /// Create a new group
    async fn create(&self, group: &Group) -> RepoResult<()>;

    /// Update a group's title, slug, and description
    async fn update(&self, group: &Group) -> RepoResult<()>;

    /// Delete a group; dependent posts keep existing with their group
    /// reference cleared
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// Find a post addressed by its author and id, the way post pages are
    async fn find_by_author_and_id(
        &self,
        author_id: Snowflake,
        id: Snowflake,
    ) -> RepoResult<Option<Post>>;

    /// List a slice of posts in the global feed ordering
    async fn list(&self, scope: FeedScope, limit: i64, offset: i64) -> RepoResult<Vec<Post>>;

    /// Count posts matching a scope
    async fn count(&self, scope: FeedScope) -> RepoResult<i64>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update text, group, and image; creation time never changes.
    /// Concurrent edits are serialized by the store, last write wins.
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post together with its comments
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List comments on a post, newest first
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Count comments on a post
    async fn count_by_post(&self, post_id: Snowflake) -> RepoResult<i64>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Create a follow edge. Inserting an edge that already exists is a
    /// no-op; concurrent duplicate inserts converge to a single edge via
    /// the pair uniqueness constraint.
    async fn create(&self, follow: &Follow) -> RepoResult<()>;

    /// Remove a follow edge. No-op when the edge does not exist.
    async fn delete(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<()>;

    /// Check whether an edge exists
    async fn exists(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<bool>;

    /// Ids of every author the user follows
    async fn authors_followed_by(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>>;

    /// Number of users following the given author
    async fn follower_count(&self, author_id: Snowflake) -> RepoResult<i64>;

    /// Number of authors the given user follows
    async fn following_count(&self, user_id: Snowflake) -> RepoResult<i64>;
}
