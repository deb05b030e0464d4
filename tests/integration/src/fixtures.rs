//! Test fixtures: in-memory ports and seed helpers
//!
//! The in-memory repositories mirror the PostgreSQL semantics exactly:
//! feed ordering, cascade on post/group/user deletion, follow-pair
//! uniqueness, and the store-level self-follow invariant.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use scribe_core::entities::{Comment, Follow, Group, Post, User};
use scribe_core::error::DomainError;
use scribe_core::traits::{
    CommentRepository, FeedCache, FeedScope, FollowRepository, GroupRepository, PostRepository,
    RepoResult, UserRepository,
};
use scribe_core::value_objects::{Page, Snowflake};
use scribe_core::SnowflakeGenerator;
use scribe_service::{MediaStore, ServiceContext, ServiceContextBuilder};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Shared in-memory state
// ============================================================================

/// Shared backing store so cascades work across repositories
#[derive(Default)]
pub struct MemoryStore {
    pub users: Mutex<Vec<User>>,
    pub groups: Mutex<Vec<Group>>,
    pub posts: Mutex<Vec<Post>>,
    pub comments: Mutex<Vec<Comment>>,
    pub follows: Mutex<Vec<Follow>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

/// Sort into the global feed ordering: created_at DESC, ties id DESC
fn feed_order(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

fn scope_matches(scope: FeedScope, post: &Post, follows: &[Follow]) -> bool {
    match scope {
        FeedScope::Home => true,
        FeedScope::Group(group_id) => post.group_id == Some(group_id),
        FeedScope::Author(author_id) => post.author_id == author_id,
        FeedScope::FollowedBy(user_id) => follows
            .iter()
            .any(|f| f.user_id == user_id && f.author_id == post.author_id),
    }
}

// ============================================================================
// Repository implementations
// ============================================================================

#[derive(Clone)]
pub struct InMemoryUserRepository(pub Arc<MemoryStore>);

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.0.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        self.0.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut users = self.0.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(DomainError::UserNotFound(id));
        }
        drop(users);

        // Account removal cascades, like the foreign keys do
        let removed_posts: Vec<Snowflake> = {
            let mut posts = self.0.posts.lock().unwrap();
            let removed = posts
                .iter()
                .filter(|p| p.author_id == id)
                .map(|p| p.id)
                .collect();
            posts.retain(|p| p.author_id != id);
            removed
        };
        self.0
            .comments
            .lock()
            .unwrap()
            .retain(|c| c.author_id != id && !removed_posts.contains(&c.post_id));
        self.0
            .follows
            .lock()
            .unwrap()
            .retain(|f| f.user_id != id && f.author_id != id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct InMemoryGroupRepository(pub Arc<MemoryStore>);

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Group>> {
        Ok(self.0.groups.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Group>> {
        Ok(self
            .0
            .groups
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.slug == slug)
            .cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Group>> {
        let mut groups = self.0.groups.lock().unwrap().clone();
        groups.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(groups)
    }

    async fn create(&self, group: &Group) -> RepoResult<()> {
        let mut groups = self.0.groups.lock().unwrap();
        if groups.iter().any(|g| g.slug == group.slug) {
            return Err(DomainError::SlugTaken(group.slug.clone()));
        }
        groups.push(group.clone());
        Ok(())
    }

    async fn update(&self, group: &Group) -> RepoResult<()> {
        let mut groups = self.0.groups.lock().unwrap();
        match groups.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => {
                *existing = group.clone();
                Ok(())
            }
            None => Err(DomainError::GroupNotFound(group.id)),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut groups = self.0.groups.lock().unwrap();
        let before = groups.len();
        groups.retain(|g| g.id != id);
        if groups.len() == before {
            return Err(DomainError::GroupNotFound(id));
        }
        drop(groups);

        // Posts survive with their group reference cleared
        for post in self.0.posts.lock().unwrap().iter_mut() {
            if post.group_id == Some(id) {
                post.detach_group();
            }
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct InMemoryPostRepository(pub Arc<MemoryStore>);

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self.0.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_author_and_id(
        &self,
        author_id: Snowflake,
        id: Snowflake,
    ) -> RepoResult<Option<Post>> {
        Ok(self
            .0
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.author_id == author_id && p.id == id)
            .cloned())
    }

    async fn list(&self, scope: FeedScope, limit: i64, offset: i64) -> RepoResult<Vec<Post>> {
        let follows = self.0.follows.lock().unwrap().clone();
        let mut posts: Vec<Post> = self
            .0
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| scope_matches(scope, p, &follows))
            .cloned()
            .collect();
        feed_order(&mut posts);

        Ok(posts
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self, scope: FeedScope) -> RepoResult<i64> {
        let follows = self.0.follows.lock().unwrap().clone();
        Ok(self
            .0
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| scope_matches(scope, p, &follows))
            .count() as i64)
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.0.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        let mut posts = self.0.posts.lock().unwrap();
        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => {
                // created_at stays put, like the SQL UPDATE
                existing.text = post.text.clone();
                existing.group_id = post.group_id;
                existing.image = post.image.clone();
                Ok(())
            }
            None => Err(DomainError::PostNotFound(post.id)),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut posts = self.0.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(DomainError::PostNotFound(id));
        }
        drop(posts);

        // Comments go with the post
        self.0.comments.lock().unwrap().retain(|c| c.post_id != id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct InMemoryCommentRepository(pub Arc<MemoryStore>);

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .0
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(comments)
    }

    async fn count_by_post(&self, post_id: Snowflake) -> RepoResult<i64> {
        Ok(self
            .0
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id)
            .count() as i64)
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.0.comments.lock().unwrap().push(comment.clone());
        Ok(())
    }
}

#[derive(Clone)]
pub struct InMemoryFollowRepository(pub Arc<MemoryStore>);

#[async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        if follow.is_self_follow() {
            return Err(DomainError::SelfFollow);
        }
        let mut follows = self.0.follows.lock().unwrap();
        // Pair uniqueness: a duplicate insert is a no-op
        if !follows
            .iter()
            .any(|f| f.user_id == follow.user_id && f.author_id == follow.author_id)
        {
            follows.push(follow.clone());
        }
        Ok(())
    }

    async fn delete(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<()> {
        self.0
            .follows
            .lock()
            .unwrap()
            .retain(|f| !(f.user_id == user_id && f.author_id == author_id));
        Ok(())
    }

    async fn exists(&self, user_id: Snowflake, author_id: Snowflake) -> RepoResult<bool> {
        Ok(self
            .0
            .follows
            .lock()
            .unwrap()
            .iter()
            .any(|f| f.user_id == user_id && f.author_id == author_id))
    }

    async fn authors_followed_by(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        Ok(self
            .0
            .follows
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.author_id)
            .collect())
    }

    async fn follower_count(&self, author_id: Snowflake) -> RepoResult<i64> {
        Ok(self
            .0
            .follows
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.author_id == author_id)
            .count() as i64)
    }

    async fn following_count(&self, user_id: Snowflake) -> RepoResult<i64> {
        Ok(self
            .0
            .follows
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.user_id == user_id)
            .count() as i64)
    }
}

// ============================================================================
// In-memory feed cache
// ============================================================================

/// In-memory stand-in for the Redis home feed cache, honoring a TTL
pub struct InMemoryFeedCache {
    ttl: Duration,
    pages: Mutex<HashMap<i64, (Instant, Page<Post>)>>,
}

impl InMemoryFeedCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            pages: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl FeedCache for InMemoryFeedCache {
    async fn get_home_page(&self, page: i64) -> Result<Option<Page<Post>>, DomainError> {
        let pages = self.pages.lock().unwrap();
        Ok(pages.get(&page).and_then(|(stored_at, cached)| {
            (stored_at.elapsed() < self.ttl).then(|| cached.clone())
        }))
    }

    async fn put_home_page(
        &self,
        requested_page: i64,
        page: &Page<Post>,
    ) -> Result<(), DomainError> {
        self.pages
            .lock()
            .unwrap()
            .insert(requested_page, (Instant::now(), page.clone()));
        Ok(())
    }

    async fn invalidate_home(&self) -> Result<(), DomainError> {
        self.pages.lock().unwrap().clear();
        Ok(())
    }
}

// ============================================================================
// Context assembly and seed helpers
// ============================================================================

/// A service context wired to in-memory ports, plus handles to the state
pub struct TestContext {
    pub ctx: ServiceContext,
    pub store: Arc<MemoryStore>,
}

/// Build a test context without a feed cache
pub fn test_context() -> TestContext {
    build_context(None)
}

/// Build a test context with an in-memory feed cache of the given TTL
pub fn test_context_with_cache(ttl: Duration) -> TestContext {
    build_context(Some(Arc::new(InMemoryFeedCache::new(ttl))))
}

fn build_context(cache: Option<Arc<InMemoryFeedCache>>) -> TestContext {
    let store = MemoryStore::new();

    let media_root = std::env::temp_dir().join(format!(
        "scribe-it-{}-{}",
        std::process::id(),
        unique_suffix()
    ));

    let mut builder = ServiceContextBuilder::new()
        .user_repo(Arc::new(InMemoryUserRepository(store.clone())))
        .group_repo(Arc::new(InMemoryGroupRepository(store.clone())))
        .post_repo(Arc::new(InMemoryPostRepository(store.clone())))
        .comment_repo(Arc::new(InMemoryCommentRepository(store.clone())))
        .follow_repo(Arc::new(InMemoryFollowRepository(store.clone())))
        .media_store(MediaStore::new(media_root))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)));

    if let Some(cache) = cache {
        builder = builder.feed_cache(cache);
    }

    TestContext {
        ctx: builder.build().expect("test context builds"),
        store,
    }
}

/// Seed a user through the repository
pub async fn seed_user(ctx: &ServiceContext, username: &str) -> User {
    let user = User::new(ctx.generate_id(), username.to_string());
    ctx.user_repo().create(&user).await.unwrap();
    user
}

/// Seed a group through the repository
pub async fn seed_group(ctx: &ServiceContext, title: &str, slug: &str) -> Group {
    let group = Group::new(
        ctx.generate_id(),
        title.to_string(),
        slug.to_string(),
        format!("{title} description"),
    );
    ctx.group_repo().create(&group).await.unwrap();
    group
}

/// A tiny but fully decodable PNG payload
pub fn png_bytes() -> Vec<u8> {
    use image::{DynamicImage, ImageOutputFormat, RgbaImage};
    use std::io::Cursor;

    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(RgbaImage::new(2, 2))
        .write_to(&mut bytes, ImageOutputFormat::Png)
        .unwrap();
    bytes.into_inner()
}

/// The PNG payload, base64-encoded the way uploads travel
pub fn png_base64() -> String {
    BASE64.encode(png_bytes())
}

/// A non-image payload, base64-encoded
pub fn text_file_base64() -> String {
    BASE64.encode(b"this is a plain text file, not an image")
}
