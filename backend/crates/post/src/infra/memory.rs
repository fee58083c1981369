//! In-memory post store

use std::collections::HashMap;
use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::owner::OwnedResourceStore;
use tokio::sync::RwLock;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{PostId, UserId};
use crate::error::{PostError, PostResult};

#[derive(Clone, Default)]
pub struct MemoryPostRepository {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }
}

impl PostRepository for MemoryPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        self.posts.write().await.insert(post.post_id, post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        Ok(self.posts.read().await.get(post_id).cloned())
    }

    async fn list_newest_first(&self) -> PostResult<Vec<Post>> {
        let mut posts: Vec<_> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        let mut posts = self.posts.write().await;
        let stored = posts.get_mut(&post.post_id).ok_or(PostError::PostNotFound)?;
        stored.likes = post.likes.clone();
        stored.comments = post.comments.clone();
        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<bool> {
        Ok(self.posts.write().await.remove(post_id).is_some())
    }

    async fn delete_by_user(&self, user_id: &UserId) -> PostResult<u64> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|_, p| &p.user_id != user_id);
        Ok((before - posts.len()) as u64)
    }
}

impl OwnedResourceStore for MemoryPostRepository {
    fn resource_name(&self) -> &'static str {
        "posts"
    }

    async fn delete_all_by_owner(&self, owner: &UserId) -> AppResult<u64> {
        self.delete_by_user(owner).await.map_err(|e| e.to_app_error())
    }
}
