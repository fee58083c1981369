//! Repository Traits

use crate::domain::entity::post::Post;
use crate::domain::value_object::{PostId, UserId};
use crate::error::PostResult;

/// Post store
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()>;

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    /// Every post, newest first
    async fn list_newest_first(&self) -> PostResult<Vec<Post>>;

    /// Write back likes and comments of an existing post
    async fn update(&self, post: &Post) -> PostResult<()>;

    /// `false` if the post was already gone
    async fn delete(&self, post_id: &PostId) -> PostResult<bool>;

    /// Delete every post written by `user_id`; returns the number removed
    async fn delete_by_user(&self, user_id: &UserId) -> PostResult<u64>;
}
