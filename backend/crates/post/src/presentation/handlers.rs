//! HTTP Handlers
//!
//! Every handler takes an [`Identity`], so every posts route is gated.

use auth::{Identity, SessionGate, UserRepository};
use axum::Json;
use axum::extract::{FromRef, Path, State};
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::{
    AddCommentUseCase, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, LikePostUseCase,
    ListPostsUseCase, RemoveCommentUseCase, UnlikePostUseCase,
};
use crate::domain::entity::post::{Comment, Like};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;
use crate::presentation::dto::{MessageResponse, PostResponse, TextRequest};

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostsAppState<P, U>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub posts: Arc<P>,
    pub users: Arc<U>,
    pub gate: SessionGate,
}

impl<P, U> FromRef<PostsAppState<P, U>> for SessionGate
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &PostsAppState<P, U>) -> Self {
        state.gate.clone()
    }
}

// ============================================================================
// Posts
// ============================================================================

/// POST /api/posts
pub async fn create_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    identity: Identity,
    JsonBody(req): JsonBody<TextRequest>,
) -> PostResult<Json<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post = CreatePostUseCase::new(state.posts.clone(), state.users.clone())
        .execute(&identity.id(), req.text)
        .await?;

    Ok(Json(post.into()))
}

/// GET /api/posts
pub async fn list_posts<P, U>(
    State(state): State<PostsAppState<P, U>>,
    _identity: Identity,
) -> PostResult<Json<Vec<PostResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.posts.clone()).execute().await?;

    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// GET /api/posts/{id}
pub async fn get_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    _identity: Identity,
    Path(post_id): Path<String>,
) -> PostResult<Json<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post = GetPostUseCase::new(state.posts.clone())
        .execute(&post_id)
        .await?;

    Ok(Json(post.into()))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    identity: Identity,
    Path(post_id): Path<String>,
) -> PostResult<Json<MessageResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    DeletePostUseCase::new(state.posts.clone())
        .execute(&identity.id(), &post_id)
        .await?;

    Ok(Json(MessageResponse {
        msg: "Post deleted",
    }))
}

// ============================================================================
// Likes
// ============================================================================

/// PUT /api/posts/like/{id}
pub async fn like_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    identity: Identity,
    Path(post_id): Path<String>,
) -> PostResult<Json<Vec<Like>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let likes = LikePostUseCase::new(state.posts.clone())
        .execute(&identity.id(), &post_id)
        .await?;

    Ok(Json(likes))
}

/// PUT /api/posts/unlike/{id}
pub async fn unlike_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    identity: Identity,
    Path(post_id): Path<String>,
) -> PostResult<Json<Vec<Like>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let likes = UnlikePostUseCase::new(state.posts.clone())
        .execute(&identity.id(), &post_id)
        .await?;

    Ok(Json(likes))
}

// ============================================================================
// Comments
// ============================================================================

/// POST /api/posts/comment/{id}
pub async fn add_comment<P, U>(
    State(state): State<PostsAppState<P, U>>,
    identity: Identity,
    Path(post_id): Path<String>,
    JsonBody(req): JsonBody<TextRequest>,
) -> PostResult<Json<Vec<Comment>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let comments = AddCommentUseCase::new(state.posts.clone(), state.users.clone())
        .execute(&identity.id(), &post_id, req.text)
        .await?;

    Ok(Json(comments))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
pub async fn remove_comment<P, U>(
    State(state): State<PostsAppState<P, U>>,
    identity: Identity,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> PostResult<Json<Vec<Comment>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let comments = RemoveCommentUseCase::new(state.posts.clone())
        .execute(&identity.id(), &post_id, &comment_id)
        .await?;

    Ok(Json(comments))
}
