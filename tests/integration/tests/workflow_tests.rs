//! Authoring workflow tests: post creation/editing/deletion and comments
//! driven through the service layer against in-memory ports.

use integration_tests::{
    png_base64, seed_group, seed_user, test_context, text_file_base64,
};
use scribe_core::traits::FeedScope;
use scribe_service::{
    CommentService, CreateCommentRequest, CreatePostRequest, FeedService, PostService,
    ServiceError, UpdatePostRequest,
};

fn post_request(text: &str) -> CreatePostRequest {
    CreatePostRequest {
        text: text.to_string(),
        group_id: None,
        image: None,
    }
}

#[tokio::test]
async fn valid_submission_creates_exactly_one_post() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;

    let before = test.ctx.post_repo().count(FeedScope::Home).await.unwrap();

    let response = PostService::new(&test.ctx)
        .create_post(Some(author.id), post_request("first post"))
        .await
        .unwrap();

    let after = test.ctx.post_repo().count(FeedScope::Home).await.unwrap();
    assert_eq!(after, before + 1);
    assert_eq!(response.text, "first post");
    assert_eq!(response.author.username, "andrew");
}

#[tokio::test]
async fn anonymous_submission_is_rejected_before_the_store() {
    let test = test_context();
    seed_user(&test.ctx, "andrew").await;

    let err = PostService::new(&test.ctx)
        .create_post(None, post_request("anonymous post"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Unauthenticated));
    assert_eq!(test.ctx.post_repo().count(FeedScope::Home).await.unwrap(), 0);
}

#[tokio::test]
async fn blank_text_is_rejected_and_leaves_count_unchanged() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;

    let err = PostService::new(&test.ctx)
        .create_post(Some(author.id), post_request("   \n\t "))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "EMPTY_TEXT");
    assert_eq!(test.ctx.post_repo().count(FeedScope::Home).await.unwrap(), 0);
}

#[tokio::test]
async fn text_file_upload_is_rejected_and_the_form_is_preserved() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;
    let group = seed_group(&test.ctx, "Test Group", "test-group").await;

    let request = CreatePostRequest {
        text: "post with image".to_string(),
        group_id: Some(group.id.to_string()),
        image: Some(text_file_base64()),
    };

    let err = PostService::new(&test.ctx)
        .create_post(Some(author.id), request)
        .await
        .unwrap_err();

    // No row is written, and the caller gets their input back
    assert_eq!(test.ctx.post_repo().count(FeedScope::Home).await.unwrap(), 0);
    match err {
        ServiceError::Rejected { error, form } => {
            assert_eq!(error.code(), "INVALID_IMAGE");
            assert_eq!(form["text"], "post with image");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn decodable_image_is_stored_with_the_post() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;

    let request = CreatePostRequest {
        text: "post with image".to_string(),
        group_id: None,
        image: Some(png_base64()),
    };

    let response = PostService::new(&test.ctx)
        .create_post(Some(author.id), request)
        .await
        .unwrap();

    let image = response.image.expect("image stored");
    assert!(image.starts_with("posts/"));
    assert!(image.ends_with(".png"));

    // The stored reference is on the feed too
    let feed = FeedService::new(&test.ctx).home(1).await.unwrap();
    assert_eq!(feed.items[0].image.as_deref(), Some(image.as_str()));
}

#[tokio::test]
async fn author_can_edit_and_creation_time_is_untouched() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;

    let service = PostService::new(&test.ctx);
    let created = service
        .create_post(Some(author.id), post_request("original text"))
        .await
        .unwrap();
    let post_id = created.id.parse().unwrap();

    let edited = service
        .edit_post(
            Some(author.id),
            "andrew",
            post_id,
            UpdatePostRequest {
                text: "new_text".to_string(),
                group_id: None,
                image: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(edited.text, "new_text");
    assert_eq!(edited.created_at, created.created_at);

    // The edit is visible wherever the post appears
    let feed = FeedService::new(&test.ctx).home(1).await.unwrap();
    assert_eq!(feed.items[0].text, "new_text");
    let profile_feed = FeedService::new(&test.ctx).author("andrew", 1).await.unwrap();
    assert_eq!(profile_feed.items[0].text, "new_text");
}

#[tokio::test]
async fn non_author_edit_is_forbidden_and_changes_nothing() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;
    let intruder = seed_user(&test.ctx, "gorlo").await;

    let service = PostService::new(&test.ctx);
    let created = service
        .create_post(Some(author.id), post_request("my post"))
        .await
        .unwrap();
    let post_id = created.id.parse().unwrap();

    let err = service
        .edit_post(
            Some(intruder.id),
            "andrew",
            post_id,
            UpdatePostRequest {
                text: "hijacked".to_string(),
                group_id: None,
                image: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Forbidden { .. }));
    let detail = service.get_post("andrew", post_id).await.unwrap();
    assert_eq!(detail.post.text, "my post");
}

#[tokio::test]
async fn deleting_a_post_removes_its_comments() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;
    let commenter = seed_user(&test.ctx, "gorlo").await;

    let service = PostService::new(&test.ctx);
    let created = service
        .create_post(Some(author.id), post_request("post for comments"))
        .await
        .unwrap();
    let post_id = created.id.parse().unwrap();

    CommentService::new(&test.ctx)
        .add_comment(
            Some(commenter.id),
            "andrew",
            post_id,
            CreateCommentRequest {
                text: "nice post".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(test.store.comments.lock().unwrap().len(), 1);

    service
        .delete_post(Some(author.id), "andrew", post_id)
        .await
        .unwrap();

    assert_eq!(test.ctx.post_repo().count(FeedScope::Home).await.unwrap(), 0);
    assert_eq!(test.store.comments.lock().unwrap().len(), 0);
}

#[tokio::test]
async fn non_author_delete_is_forbidden() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;
    let intruder = seed_user(&test.ctx, "gorlo").await;

    let service = PostService::new(&test.ctx);
    let created = service
        .create_post(Some(author.id), post_request("keep me"))
        .await
        .unwrap();
    let post_id = created.id.parse().unwrap();

    let err = service
        .delete_post(Some(intruder.id), "andrew", post_id)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Forbidden { .. }));
    assert_eq!(test.ctx.post_repo().count(FeedScope::Home).await.unwrap(), 1);
}

#[tokio::test]
async fn anonymous_comment_is_rejected_and_count_stays_zero() {
    let test = test_context();
    let author = seed_user(&test.ctx, "gorlo").await;

    let created = PostService::new(&test.ctx)
        .create_post(Some(author.id), post_request("post for comments"))
        .await
        .unwrap();
    let post_id = created.id.parse().unwrap();

    let comments = CommentService::new(&test.ctx);

    let err = comments
        .add_comment(
            None,
            "gorlo",
            post_id,
            CreateCommentRequest {
                text: "comment from anon".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthenticated));

    assert_eq!(
        test.ctx.comment_repo().count_by_post(post_id).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn authenticated_comment_lands_on_the_post_page() {
    let test = test_context();
    let author = seed_user(&test.ctx, "gorlo").await;
    let commenter = seed_user(&test.ctx, "andrew").await;

    let created = PostService::new(&test.ctx)
        .create_post(Some(author.id), post_request("post for comments"))
        .await
        .unwrap();
    let post_id = created.id.parse().unwrap();

    CommentService::new(&test.ctx)
        .add_comment(
            Some(commenter.id),
            "gorlo",
            post_id,
            CreateCommentRequest {
                text: "comment from auth".to_string(),
            },
        )
        .await
        .unwrap();

    let detail = PostService::new(&test.ctx)
        .get_post("gorlo", post_id)
        .await
        .unwrap();
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].text, "comment from auth");
    assert_eq!(detail.comments[0].author.username, "andrew");
    assert_eq!(detail.post.comment_count, 1);
}

#[tokio::test]
async fn blank_comment_is_rejected_with_form() {
    let test = test_context();
    let author = seed_user(&test.ctx, "gorlo").await;

    let created = PostService::new(&test.ctx)
        .create_post(Some(author.id), post_request("post"))
        .await
        .unwrap();
    let post_id = created.id.parse().unwrap();

    let err = CommentService::new(&test.ctx)
        .add_comment(
            Some(author.id),
            "gorlo",
            post_id,
            CreateCommentRequest {
                text: "   ".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "EMPTY_TEXT");
    assert_eq!(
        test.ctx.comment_repo().count_by_post(post_id).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn editing_a_missing_post_is_not_found() {
    let test = test_context();
    let author = seed_user(&test.ctx, "andrew").await;

    let err = PostService::new(&test.ctx)
        .edit_post(
            Some(author.id),
            "andrew",
            scribe_core::Snowflake::new(999_999),
            UpdatePostRequest {
                text: "whatever".to_string(),
                group_id: None,
                image: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound { .. }));
}
