//! User Entity
//!
//! A registered account: display name, login email, password hash and
//! avatar URL. The hash never leaves the domain layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_object::{
    UserId, avatar::gravatar_url, email::Email, user_name::UserName, user_password::UserPassword,
};

/// Account entity
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub name: UserName,
    pub email: Email,
    pub password: UserPassword,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// New account with a fresh id and a Gravatar avatar
    pub fn new(name: UserName, email: Email, password: UserPassword) -> Self {
        let avatar = Some(gravatar_url(&email));
        Self {
            user_id: UserId::new(),
            name,
            email,
            password,
            avatar,
            created_at: Utc::now(),
        }
    }

    /// Public part shown next to profiles, posts and comments
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.user_id,
            name: self.name.as_str().to_string(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Owner/author information embedded in other resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub avatar: Option<String>,
}
