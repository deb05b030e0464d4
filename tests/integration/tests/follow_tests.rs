//! Follow graph tests: idempotence, round-trips, and the silent no-op
//! policy for self- and duplicate-follows.

use integration_tests::{seed_user, test_context, InMemoryFollowRepository};
use scribe_core::entities::Follow;
use scribe_core::error::DomainError;
use scribe_core::traits::FollowRepository;
use scribe_service::FollowService;

#[tokio::test]
async fn follow_then_unfollow_round_trips_the_graph() {
    let test = test_context();
    let user = seed_user(&test.ctx, "andrew").await;
    let author = seed_user(&test.ctx, "gorlo").await;

    let service = FollowService::new(&test.ctx);

    assert!(!service.is_following(user.id, author.id).await.unwrap());

    service.follow(Some(user.id), "gorlo").await.unwrap();
    assert!(service.is_following(user.id, author.id).await.unwrap());
    assert_eq!(
        test.ctx.follow_repo().follower_count(author.id).await.unwrap(),
        1
    );

    service.unfollow(Some(user.id), "gorlo").await.unwrap();
    assert!(!service.is_following(user.id, author.id).await.unwrap());
    assert_eq!(
        test.ctx.follow_repo().follower_count(author.id).await.unwrap(),
        0
    );
    assert!(test.store.follows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_follow_is_a_silent_no_op() {
    let test = test_context();
    let user = seed_user(&test.ctx, "andrew").await;
    seed_user(&test.ctx, "gorlo").await;

    let service = FollowService::new(&test.ctx);
    service.follow(Some(user.id), "gorlo").await.unwrap();
    service.follow(Some(user.id), "gorlo").await.unwrap();

    assert_eq!(test.store.follows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn self_follow_is_a_silent_no_op() {
    let test = test_context();
    let user = seed_user(&test.ctx, "andrew").await;

    FollowService::new(&test.ctx)
        .follow(Some(user.id), "andrew")
        .await
        .unwrap();

    assert!(test.store.follows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unfollowing_a_missing_edge_is_a_no_op() {
    let test = test_context();
    let user = seed_user(&test.ctx, "andrew").await;
    seed_user(&test.ctx, "gorlo").await;

    FollowService::new(&test.ctx)
        .unfollow(Some(user.id), "gorlo")
        .await
        .unwrap();

    assert!(test.store.follows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn anonymous_follow_is_rejected() {
    let test = test_context();
    seed_user(&test.ctx, "gorlo").await;

    let err = FollowService::new(&test.ctx)
        .follow(None, "gorlo")
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "UNAUTHENTICATED");
}

#[tokio::test]
async fn following_an_unknown_user_is_not_found() {
    let test = test_context();
    let user = seed_user(&test.ctx, "andrew").await;

    let err = FollowService::new(&test.ctx)
        .follow(Some(user.id), "nobody")
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn followed_authors_lists_every_edge() {
    let test = test_context();
    let user = seed_user(&test.ctx, "andrew").await;
    let first = seed_user(&test.ctx, "gorlo").await;
    let second = seed_user(&test.ctx, "mira").await;

    let service = FollowService::new(&test.ctx);
    service.follow(Some(user.id), "gorlo").await.unwrap();
    service.follow(Some(user.id), "mira").await.unwrap();

    let mut authors = service.followed_authors(user.id).await.unwrap();
    authors.sort();
    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(authors, expected);
}

#[tokio::test]
async fn store_rejects_a_direct_self_follow_insert() {
    // The workflow skips self-follows; the store still holds the line
    let test = test_context();
    let user = seed_user(&test.ctx, "andrew").await;

    let repo = InMemoryFollowRepository(test.store.clone());
    let err = repo.create(&Follow::new(user.id, user.id)).await.unwrap_err();
    assert!(matches!(err, DomainError::SelfFollow));
}
