//! Feed assembly tests: scope filtering, global ordering, page clamping,
//! and the home feed cache's staleness window.

use std::time::Duration;

use integration_tests::{seed_group, seed_user, test_context, test_context_with_cache};
use scribe_core::entities::Post;
use scribe_service::{CreatePostRequest, FeedService, FollowService, PostService, ServiceError};

fn post_request(text: &str) -> CreatePostRequest {
    CreatePostRequest {
        text: text.to_string(),
        group_id: None,
        image: None,
    }
}

#[tokio::test]
async fn new_post_appears_on_home_profile_group_and_post_pages() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;
    let group = seed_group(&test.ctx, "Test Group", "test-group").await;

    let created = PostService::new(&test.ctx)
        .create_post(
            Some(author.id),
            CreatePostRequest {
                text: "test text 2".to_string(),
                group_id: Some(group.id.to_string()),
                image: None,
            },
        )
        .await
        .unwrap();

    let feed = FeedService::new(&test.ctx);

    let home = feed.home(1).await.unwrap();
    assert_eq!(home.items[0].id, created.id);

    let profile = feed.author("andrew", 1).await.unwrap();
    assert_eq!(profile.items[0].id, created.id);

    let by_group = feed.group("test-group", 1).await.unwrap();
    assert_eq!(by_group.items[0].id, created.id);
    assert_eq!(by_group.items[0].group.as_ref().unwrap().slug, "test-group");

    let detail = PostService::new(&test.ctx)
        .get_post("andrew", created.id.parse().unwrap())
        .await
        .unwrap();
    assert_eq!(detail.post.id, created.id);
}

#[tokio::test]
async fn feeds_are_newest_first_with_id_breaking_ties() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;

    // Two posts sharing one timestamp: the later id wins the tie
    let stamp = chrono::Utc::now();
    let mut first = Post::new(test.ctx.generate_id(), author.id, "older".to_string());
    first.created_at = stamp;
    let mut second = Post::new(test.ctx.generate_id(), author.id, "newer".to_string());
    second.created_at = stamp;

    test.ctx.post_repo().create(&first).await.unwrap();
    test.ctx.post_repo().create(&second).await.unwrap();

    let home = FeedService::new(&test.ctx).home(1).await.unwrap();
    assert_eq!(home.items[0].text, "newer");
    assert_eq!(home.items[1].text, "older");
}

#[tokio::test]
async fn pages_clamp_to_the_nearest_valid_page() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;

    let service = PostService::new(&test.ctx);
    for i in 0..25 {
        service
            .create_post(Some(author.id), post_request(&format!("post {i}")))
            .await
            .unwrap();
    }

    let feed = FeedService::new(&test.ctx);

    let first = feed.home(1).await.unwrap();
    assert_eq!(first.page, 1);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.total_count, 25);
    assert_eq!(first.items.len(), 10);

    // Past the end lands on the last page
    let beyond = feed.home(99).await.unwrap();
    assert_eq!(beyond.page, 3);
    assert_eq!(beyond.items.len(), 5);

    // Below one lands on the first page
    let below = feed.home(0).await.unwrap();
    assert_eq!(below.page, 1);
    assert_eq!(below.items.len(), 10);

    let negative = feed.home(-4).await.unwrap();
    assert_eq!(negative.page, 1);
}

#[tokio::test]
async fn group_feed_filters_by_slug_and_unknown_slug_is_not_found() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;
    let group = seed_group(&test.ctx, "Rust", "rust").await;
    seed_group(&test.ctx, "Cooking", "cooking").await;

    let service = PostService::new(&test.ctx);
    service
        .create_post(
            Some(author.id),
            CreatePostRequest {
                text: "tagged".to_string(),
                group_id: Some(group.id.to_string()),
                image: None,
            },
        )
        .await
        .unwrap();
    service
        .create_post(Some(author.id), post_request("untagged"))
        .await
        .unwrap();

    let feed = FeedService::new(&test.ctx);

    let rust = feed.group("rust", 1).await.unwrap();
    assert_eq!(rust.total_count, 1);
    assert_eq!(rust.items[0].text, "tagged");

    let cooking = feed.group("cooking", 1).await.unwrap();
    assert_eq!(cooking.total_count, 0);
    assert!(cooking.items.is_empty());

    let err = feed.group("no-such-group", 1).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

#[tokio::test]
async fn following_feed_tracks_the_follow_graph() {
    let test = test_context();
    let reader = seed_user(&test.ctx, "reader").await;
    let writer = seed_user(&test.ctx, "writer").await;

    let follows = FollowService::new(&test.ctx);
    let feed = FeedService::new(&test.ctx);

    follows.follow(Some(reader.id), "writer").await.unwrap();

    PostService::new(&test.ctx)
        .create_post(Some(writer.id), post_request("hello"))
        .await
        .unwrap();

    let following = feed.following(Some(reader.id), 1).await.unwrap();
    assert_eq!(following.total_count, 1);
    assert_eq!(following.items[0].text, "hello");

    follows.unfollow(Some(reader.id), "writer").await.unwrap();

    let following = feed.following(Some(reader.id), 1).await.unwrap();
    assert_eq!(following.total_count, 0);
    assert!(!following.items.iter().any(|p| p.text == "hello"));
}

#[tokio::test]
async fn empty_follow_set_yields_a_valid_empty_page() {
    let test = test_context();
    let reader = seed_user(&test.ctx, "reader").await;
    let writer = seed_user(&test.ctx, "writer").await;

    PostService::new(&test.ctx)
        .create_post(Some(writer.id), post_request("not for reader"))
        .await
        .unwrap();

    let following = FeedService::new(&test.ctx)
        .following(Some(reader.id), 1)
        .await
        .unwrap();

    assert_eq!(following.total_count, 0);
    assert_eq!(following.page, 1);
    assert_eq!(following.total_pages, 1);
    assert!(following.items.is_empty());
}

#[tokio::test]
async fn deleting_a_group_keeps_its_posts() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;
    let group = seed_group(&test.ctx, "Doomed", "doomed").await;

    PostService::new(&test.ctx)
        .create_post(
            Some(author.id),
            CreatePostRequest {
                text: "survivor".to_string(),
                group_id: Some(group.id.to_string()),
                image: None,
            },
        )
        .await
        .unwrap();

    test.ctx.group_repo().delete(group.id).await.unwrap();

    // The post survives with its group reference cleared
    let home = FeedService::new(&test.ctx).home(1).await.unwrap();
    assert_eq!(home.total_count, 1);
    assert_eq!(home.items[0].text, "survivor");
    assert!(home.items[0].group.is_none());

    // The group feed itself is gone
    let err = FeedService::new(&test.ctx).group("doomed", 1).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

#[tokio::test]
async fn home_cache_serves_stale_reads_inside_the_window() {
    let test = test_context_with_cache(Duration::from_secs(20));
    let author = seed_user(&test.ctx, "andrew").await;

    PostService::new(&test.ctx)
        .create_post(Some(author.id), post_request("cached post"))
        .await
        .unwrap();

    let feed = FeedService::new(&test.ctx);

    // First read populates the cache
    let first = feed.home(1).await.unwrap();
    assert_eq!(first.total_count, 1);

    // A write that bypasses the workflow doesn't invalidate; the cached
    // snapshot keeps being served inside the TTL window
    let sneaky = Post::new(test.ctx.generate_id(), author.id, "sneaky".to_string());
    test.ctx.post_repo().create(&sneaky).await.unwrap();

    let stale = feed.home(1).await.unwrap();
    assert_eq!(stale.total_count, 1);
    assert!(!stale.items.iter().any(|p| p.text == "sneaky"));
}

#[tokio::test]
async fn post_creation_invalidates_the_home_cache() {
    let test = test_context_with_cache(Duration::from_secs(20));
    let author = seed_user(&test.ctx, "andrew").await;

    let service = PostService::new(&test.ctx);
    let feed = FeedService::new(&test.ctx);

    service
        .create_post(Some(author.id), post_request("first"))
        .await
        .unwrap();
    let first = feed.home(1).await.unwrap();
    assert_eq!(first.total_count, 1);

    // Creating through the workflow drops the cached pages
    service
        .create_post(Some(author.id), post_request("second"))
        .await
        .unwrap();

    let fresh = feed.home(1).await.unwrap();
    assert_eq!(fresh.total_count, 2);
    assert_eq!(fresh.items[0].text, "second");
}

#[tokio::test]
async fn home_cache_entries_expire_after_the_ttl() {
    let test = test_context_with_cache(Duration::from_millis(40));
    let author = seed_user(&test.ctx, "andrew").await;

    PostService::new(&test.ctx)
        .create_post(Some(author.id), post_request("original"))
        .await
        .unwrap();

    let feed = FeedService::new(&test.ctx);
    feed.home(1).await.unwrap();

    // Bypass the workflow, then outwait the TTL
    let late = Post::new(test.ctx.generate_id(), author.id, "late".to_string());
    test.ctx.post_repo().create(&late).await.unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;

    let fresh = feed.home(1).await.unwrap();
    assert_eq!(fresh.total_count, 2);
}
