//! Post REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreatePostRequest, CurrentUser, JsonBody, MessageResponse,
    PostDto, PostListResponse, PostResponse, UpdatePostRequest,
};

use blog_core::Post;
use blog_db::PostRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

const POST_NOT_FOUND: &str = "Post not found";

/// Load a post the current user is allowed to modify
async fn find_owned(repo: &PostRepository, post_id: Uuid, user_id: Uuid) -> ApiResult<Post> {
    let post = repo
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))?;

    if !post.is_owned_by(user_id) {
        log::warn!("User {} denied access to post {}", user_id, post_id);
        return Err(ApiError::forbidden());
    }

    Ok(post)
}

/// GET /posts
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<PostListResponse>> {
    let repo = PostRepository::new(state.pool.clone());
    let posts = repo.list_with_authors().await?;

    Ok(Json(PostListResponse {
        posts: posts.into_iter().map(PostDto::from).collect(),
    }))
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<PostResponse>> {
    let post_uuid = Uuid::parse_str(&post_id)?;

    let repo = PostRepository::new(state.pool.clone());
    let post = repo
        .find_with_author(post_uuid)
        .await?
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))?;

    Ok(Json(PostResponse { post: post.into() }))
}

/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    JsonBody(req): JsonBody<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<PostResponse>)> {
    let (Some(title), Some(text)) = (
        req.title.filter(|t| !t.trim().is_empty()),
        req.text.filter(|t| !t.trim().is_empty()),
    ) else {
        return Err(ApiError::bad_request("Missing fields"));
    };

    let post = Post::new(
        title,
        text,
        req.tags.unwrap_or_default(),
        req.published.unwrap_or(true),
        user.id,
    );

    let repo = PostRepository::new(state.pool.clone());
    repo.create(&post).await?;

    log::info!("User {} created post {}", user.id, post.id);

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            post: PostDto::authored_by(post, &user),
        }),
    ))
}

/// PATCH /posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(post_id): Path<String>,
    JsonBody(req): JsonBody<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let post_uuid = Uuid::parse_str(&post_id)?;

    let repo = PostRepository::new(state.pool.clone());
    let mut post = find_owned(&repo, post_uuid, user.id).await?;

    post.apply(req.into())?;

    if !repo.update(&post).await? {
        return Err(ApiError::not_found(POST_NOT_FOUND));
    }

    log::info!("User {} updated post {}", user.id, post.id);

    Ok(Json(PostResponse {
        post: PostDto::authored_by(post, &user),
    }))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(post_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let post_uuid = Uuid::parse_str(&post_id)?;

    let repo = PostRepository::new(state.pool.clone());
    find_owned(&repo, post_uuid, user.id).await?;

    if !repo.delete(post_uuid).await? {
        return Err(ApiError::not_found(POST_NOT_FOUND));
    }

    log::info!("User {} deleted post {}", user.id, post_uuid);

    Ok(Json(MessageResponse::new("Deleted")))
}
