//! Post queries

use std::sync::Arc;

use crate::application::load_post;
use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

pub struct ListPostsUseCase<P: PostRepository> {
    posts: Arc<P>,
}

impl<P: PostRepository> ListPostsUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    pub async fn execute(&self) -> PostResult<Vec<Post>> {
        self.posts.list_newest_first().await
    }
}

pub struct GetPostUseCase<P: PostRepository> {
    posts: Arc<P>,
}

impl<P: PostRepository> GetPostUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Unparseable ids are reported as unknown posts
    pub async fn execute(&self, raw_post_id: &str) -> PostResult<Post> {
        load_post(self.posts.as_ref(), raw_post_id).await
    }
}
