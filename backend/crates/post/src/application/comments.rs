//! Comment Use Cases

use std::sync::Arc;

use auth::UserRepository;
use kernel::error::field::FieldErrors;

use crate::application::{author, load_post};
use crate::domain::entity::post::Comment;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{CommentId, UserId, post_text::PostText};
use crate::error::{PostError, PostResult};

pub struct AddCommentUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    posts: Arc<P>,
    users: Arc<U>,
}

impl<P, U> AddCommentUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    pub fn new(posts: Arc<P>, users: Arc<U>) -> Self {
        Self { posts, users }
    }

    /// Returns the post's comments, newest first
    pub async fn execute(
        &self,
        caller: &UserId,
        raw_post_id: &str,
        text: Option<String>,
    ) -> PostResult<Vec<Comment>> {
        let mut errors = FieldErrors::new();
        let Some(text) = errors.check("text", PostText::new(text)) else {
            return Err(PostError::Validation(errors.into_vec()));
        };

        let author = author(self.users.as_ref(), caller).await?;
        let mut post = load_post(self.posts.as_ref(), raw_post_id).await?;

        post.add_comment(Comment::new(&author, text));
        self.posts.update(&post).await?;

        Ok(post.comments)
    }
}

pub struct RemoveCommentUseCase<P: PostRepository> {
    posts: Arc<P>,
}

impl<P: PostRepository> RemoveCommentUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Only the comment's author may remove it
    pub async fn execute(
        &self,
        caller: &UserId,
        raw_post_id: &str,
        raw_comment_id: &str,
    ) -> PostResult<Vec<Comment>> {
        let mut post = load_post(self.posts.as_ref(), raw_post_id).await?;
        let comment_id: CommentId = raw_comment_id
            .parse()
            .map_err(|_| PostError::CommentNotFound)?;

        post.remove_comment(&comment_id, caller)?;
        self.posts.update(&post).await?;

        Ok(post.comments)
    }
}
