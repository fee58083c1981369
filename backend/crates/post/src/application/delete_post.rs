//! Delete Post Use Case

use std::sync::Arc;

use crate::application::load_post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::UserId;
use crate::error::{PostError, PostResult};

pub struct DeletePostUseCase<P: PostRepository> {
    posts: Arc<P>,
}

impl<P: PostRepository> DeletePostUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Only the author may delete a post
    pub async fn execute(&self, caller: &UserId, raw_post_id: &str) -> PostResult<()> {
        let post = load_post(self.posts.as_ref(), raw_post_id).await?;

        if !post.is_owned_by(caller) {
            return Err(PostError::NotAuthorized);
        }

        if !self.posts.delete(&post.post_id).await? {
            return Err(PostError::PostNotFound);
        }

        tracing::info!(user_id = %caller, post_id = %post.post_id, "Post deleted");

        Ok(())
    }
}
