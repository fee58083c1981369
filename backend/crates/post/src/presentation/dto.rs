//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::post::{Comment, Like, Post};
use crate::domain::value_object::{PostId, UserId};

/// Body of a new post or comment
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TextRequest {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub user: UserId,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id,
            user: post.user_id,
            text: post.text,
            name: post.name,
            avatar: post.avatar,
            likes: post.likes,
            comments: post.comments,
            date: post.created_at,
        }
    }
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}
