//! Application Layer
//!
//! Use cases for posts, likes and comments.

pub mod comments;
pub mod create_post;
pub mod delete_post;
pub mod likes;
pub mod queries;

// Re-exports
pub use comments::{AddCommentUseCase, RemoveCommentUseCase};
pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use likes::{LikePostUseCase, UnlikePostUseCase};
pub use queries::{GetPostUseCase, ListPostsUseCase};

use auth::{AuthError, UserRepository, UserSummary};

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{PostId, UserId};
use crate::error::{PostError, PostResult};

/// Public summary of the caller, who must still have an account
async fn author<U: UserRepository>(users: &U, user_id: &UserId) -> PostResult<UserSummary> {
    users
        .find_by_id(user_id)
        .await?
        .map(|u| u.summary())
        .ok_or(PostError::Auth(AuthError::UserNotFound))
}

/// Load a post by the id taken from the URL
async fn load_post<P: PostRepository>(posts: &P, raw_post_id: &str) -> PostResult<Post> {
    let post_id: PostId = raw_post_id.parse().map_err(|_| PostError::PostNotFound)?;

    posts
        .find_by_id(&post_id)
        .await?
        .ok_or(PostError::PostNotFound)
}
