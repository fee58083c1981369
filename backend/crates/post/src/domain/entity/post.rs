//! Post Entity
//!
//! A post with its likes and comments embedded. The author's name and
//! avatar are copied in when the post or comment is written, so they keep
//! showing after the author renames or deletes the account.

use auth::UserSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{CommentId, PostId, UserId, post_text::PostText};
use crate::error::{PostError, PostResult};

/// One user's like; at most one per user per post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub user: UserId,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &UserSummary, text: PostText) -> Self {
        Self {
            id: CommentId::new(),
            user: author.id,
            text: text.into_inner(),
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub post_id: PostId,
    pub user_id: UserId,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    /// Newest first
    pub likes: Vec<Like>,
    /// Newest first
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(author: &UserSummary, text: PostText) -> Self {
        Self {
            post_id: PostId::new(),
            user_id: author.id,
            text: text.into_inner(),
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.iter().any(|l| &l.user == user_id)
    }

    pub fn like(&mut self, user_id: UserId) -> PostResult<()> {
        if self.is_liked_by(&user_id) {
            return Err(PostError::AlreadyLiked);
        }
        self.likes.insert(0, Like { user: user_id });
        Ok(())
    }

    pub fn unlike(&mut self, user_id: &UserId) -> PostResult<()> {
        if !self.is_liked_by(user_id) {
            return Err(PostError::NotLiked);
        }
        self.likes.retain(|l| &l.user != user_id);
        Ok(())
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Remove exactly the comment with `comment_id`, if `caller` wrote it
    pub fn remove_comment(&mut self, comment_id: &CommentId, caller: &UserId) -> PostResult<()> {
        let index = self
            .comments
            .iter()
            .position(|c| &c.id == comment_id)
            .ok_or(PostError::CommentNotFound)?;

        if &self.comments[index].user != caller {
            return Err(PostError::NotAuthorized);
        }

        self.comments.remove(index);
        Ok(())
    }
}
