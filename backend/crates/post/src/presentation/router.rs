//! Posts Router

use auth::{SessionGate, UserRepository};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::PostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the posts router for any repository implementation
pub fn posts_router<P, U>(posts: P, users: U, gate: SessionGate) -> Router
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState {
        posts: Arc::new(posts),
        users: Arc::new(users),
        gate,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_posts::<P, U>).post(handlers::create_post::<P, U>),
        )
        .route(
            "/{id}",
            get(handlers::get_post::<P, U>).delete(handlers::delete_post::<P, U>),
        )
        .route("/like/{id}", put(handlers::like_post::<P, U>))
        .route("/unlike/{id}", put(handlers::unlike_post::<P, U>))
        .route("/comment/{id}", post(handlers::add_comment::<P, U>))
        .route(
            "/comment/{id}/{comment_id}",
            delete(handlers::remove_comment::<P, U>),
        )
        .with_state(state)
}
