//! Post authoring workflow
//!
//! Handles post creation, editing, deletion, and the post page. A
//! submission moves from received to persisted only when the caller is
//! authenticated, the text survives the trim check, and any upload
//! decodes as an image; otherwise it is rejected with the specific error
//! and the untouched form.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::{info, instrument, warn};

use scribe_core::entities::{Group, Post};
use scribe_core::error::DomainError;
use scribe_core::value_objects::Snowflake;

use crate::dto::{
    AuthorResponse, CommentResponse, CreatePostRequest, GroupRefResponse, PostDetailResponse,
    PostResponse, UpdatePostRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::media::validate_image;

/// Upper bound on post text length (characters)
const MAX_TEXT_LEN: usize = 10_000;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new post
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        viewer: Option<Snowflake>,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let author_id = viewer.ok_or(ServiceError::Unauthenticated)?;

        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", author_id.to_string()))?;

        validate_text(&request.text, &request)?;
        let group = self.resolve_group(request.group_id.as_deref()).await?;
        let upload = decode_upload(request.image.as_deref(), &request)?;

        let post_id = self.ctx.generate_id();
        let mut post = Post::new(post_id, author_id, request.text.clone());
        post.group_id = group.as_ref().map(|g| g.id);

        // The upload already decoded; writing it and the row form one unit
        if let Some((bytes, ext)) = &upload {
            let stored = self
                .ctx
                .media_store()
                .store_post_image(post_id, bytes, ext)
                .await?;
            post.image = Some(stored);
        }

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post_id, author_id = %author_id, "Post created");

        self.invalidate_home_feed().await;

        Ok(assemble_response(post, &author, group.as_ref(), 0))
    }

    /// Edit an existing post; only its author may do so
    #[instrument(skip(self, request))]
    pub async fn edit_post(
        &self,
        viewer: Option<Snowflake>,
        username: &str,
        post_id: Snowflake,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let viewer_id = viewer.ok_or(ServiceError::Unauthenticated)?;

        let (author, mut post) = self.find_addressed_post(username, post_id).await?;

        if !post.is_authored_by(viewer_id) {
            return Err(ServiceError::forbidden("Post"));
        }

        validate_text(&request.text, &request)?;
        let group = self.resolve_group(request.group_id.as_deref()).await?;
        let upload = decode_upload(request.image.as_deref(), &request)?;

        post.text = request.text.clone();
        post.group_id = group.as_ref().map(|g| g.id);

        // A missing upload keeps the stored image
        if let Some((bytes, ext)) = &upload {
            let stored = self
                .ctx
                .media_store()
                .store_post_image(post.id, bytes, ext)
                .await?;
            post.image = Some(stored);
        }

        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post.id, "Post updated");

        let comment_count = self.ctx.comment_repo().count_by_post(post.id).await?;
        Ok(assemble_response(post, &author, group.as_ref(), comment_count))
    }

    /// Delete a post together with its comments; only its author may do so
    #[instrument(skip(self))]
    pub async fn delete_post(
        &self,
        viewer: Option<Snowflake>,
        username: &str,
        post_id: Snowflake,
    ) -> ServiceResult<()> {
        let viewer_id = viewer.ok_or(ServiceError::Unauthenticated)?;

        let (_, post) = self.find_addressed_post(username, post_id).await?;

        if !post.is_authored_by(viewer_id) {
            return Err(ServiceError::forbidden("Post"));
        }

        self.ctx.post_repo().delete(post.id).await?;

        info!(post_id = %post.id, "Post deleted");

        Ok(())
    }

    /// Fetch a post page: the post and its comments, newest first
    #[instrument(skip(self))]
    pub async fn get_post(
        &self,
        username: &str,
        post_id: Snowflake,
    ) -> ServiceResult<PostDetailResponse> {
        let (_, post) = self.find_addressed_post(username, post_id).await?;

        let comments = self.ctx.comment_repo().find_by_post(post.id).await?;
        let mut comment_responses = Vec::with_capacity(comments.len());
        for comment in comments {
            let author = self
                .ctx
                .user_repo()
                .find_by_id(comment.author_id)
                .await?
                .ok_or_else(|| ServiceError::internal("comment author missing"))?;
            comment_responses.push(CommentResponse {
                id: comment.id.to_string(),
                author: AuthorResponse::from(&author),
                text: comment.text,
                created_at: comment.created_at,
            });
        }

        let post_response = build_post_response(self.ctx, post).await?;

        Ok(PostDetailResponse {
            post: post_response,
            comments: comment_responses,
        })
    }

    /// Resolve a post addressed by author username and post id
    pub(crate) async fn find_addressed_post(
        &self,
        username: &str,
        post_id: Snowflake,
    ) -> ServiceResult<(scribe_core::entities::User, Post)> {
        let author = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))?;

        let post = self
            .ctx
            .post_repo()
            .find_by_author_and_id(author.id, post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        Ok((author, post))
    }

    async fn resolve_group(&self, group_id: Option<&str>) -> ServiceResult<Option<Group>> {
        let Some(raw) = group_id else {
            return Ok(None);
        };

        let id: Snowflake = raw
            .parse()
            .map_err(|_| ServiceError::not_found("Group", raw))?;

        let group = self
            .ctx
            .group_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Group", raw))?;

        Ok(Some(group))
    }

    /// Creation invalidates the home feed cache; a failure here only costs
    /// freshness, never the request
    async fn invalidate_home_feed(&self) {
        if let Some(cache) = self.ctx.feed_cache() {
            if let Err(e) = cache.invalidate_home().await {
                warn!(error = %e, "Failed to invalidate home feed cache");
            }
        }
    }
}

/// Reject blank or overlong text, echoing the submitted form
fn validate_text<F: serde::Serialize>(text: &str, form: &F) -> ServiceResult<()> {
    if text.trim().is_empty() {
        return Err(ServiceError::rejected(DomainError::EmptyText, form));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(ServiceError::rejected(
            DomainError::TextTooLong { max: MAX_TEXT_LEN },
            form,
        ));
    }
    Ok(())
}

/// Decode and validate an optional base64 upload, echoing the form on failure
fn decode_upload<F: serde::Serialize>(
    image: Option<&str>,
    form: &F,
) -> ServiceResult<Option<(Vec<u8>, &'static str)>> {
    let Some(encoded) = image else {
        return Ok(None);
    };

    let bytes = BASE64.decode(encoded).map_err(|_| {
        ServiceError::rejected(
            DomainError::InvalidImage("invalid base64 encoding".to_string()),
            form,
        )
    })?;

    let ext = validate_image(&bytes).map_err(|e| ServiceError::rejected(e, form))?;

    Ok(Some((bytes, ext)))
}

fn assemble_response(
    post: Post,
    author: &scribe_core::entities::User,
    group: Option<&Group>,
    comment_count: i64,
) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        author: AuthorResponse::from(author),
        group: group.map(GroupRefResponse::from),
        text: post.text,
        image: post.image,
        comment_count,
        created_at: post.created_at,
    }
}

/// Build a post response, looking up its author, group, and comment count
pub(crate) async fn build_post_response(
    ctx: &ServiceContext,
    post: Post,
) -> ServiceResult<PostResponse> {
    let author = ctx
        .user_repo()
        .find_by_id(post.author_id)
        .await?
        .ok_or_else(|| ServiceError::internal("post author missing"))?;

    let group = match post.group_id {
        Some(group_id) => ctx.group_repo().find_by_id(group_id).await?,
        None => None,
    };

    let comment_count = ctx.comment_repo().count_by_post(post.id).await?;

    Ok(assemble_response(post, &author, group.as_ref(), comment_count))
}
