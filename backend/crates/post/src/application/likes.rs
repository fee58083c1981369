//! Like / Unlike Use Cases

use std::sync::Arc;

use crate::application::load_post;
use crate::domain::entity::post::Like;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::UserId;
use crate::error::PostResult;

pub struct LikePostUseCase<P: PostRepository> {
    posts: Arc<P>,
}

impl<P: PostRepository> LikePostUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Returns the post's likes after the change
    pub async fn execute(&self, caller: &UserId, raw_post_id: &str) -> PostResult<Vec<Like>> {
        let mut post = load_post(self.posts.as_ref(), raw_post_id).await?;

        post.like(*caller)?;
        self.posts.update(&post).await?;

        Ok(post.likes)
    }
}

pub struct UnlikePostUseCase<P: PostRepository> {
    posts: Arc<P>,
}

impl<P: PostRepository> UnlikePostUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Returns the post's likes after the change
    pub async fn execute(&self, caller: &UserId, raw_post_id: &str) -> PostResult<Vec<Like>> {
        let mut post = load_post(self.posts.as_ref(), raw_post_id).await?;

        post.unlike(caller)?;
        self.posts.update(&post).await?;

        Ok(post.likes)
    }
}
