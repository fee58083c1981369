//! Create Post Use Case

use std::sync::Arc;

use auth::UserRepository;
use kernel::error::field::FieldErrors;

use crate::application::author;
use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{UserId, post_text::PostText};
use crate::error::{PostError, PostResult};

pub struct CreatePostUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    posts: Arc<P>,
    users: Arc<U>,
}

impl<P, U> CreatePostUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    pub fn new(posts: Arc<P>, users: Arc<U>) -> Self {
        Self { posts, users }
    }

    pub async fn execute(&self, user_id: &UserId, text: Option<String>) -> PostResult<Post> {
        let mut errors = FieldErrors::new();
        let Some(text) = errors.check("text", PostText::new(text)) else {
            return Err(PostError::Validation(errors.into_vec()));
        };

        let author = author(self.users.as_ref(), user_id).await?;
        let post = Post::new(&author, text);
        self.posts.create(&post).await?;

        tracing::info!(user_id = %user_id, post_id = %post.post_id, "Post created");

        Ok(post)
    }
}
