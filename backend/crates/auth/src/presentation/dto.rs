//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::value_object::UserId;

// ============================================================================
// Register / Login
// ============================================================================

/// Register request
///
/// Missing fields deserialize as empty strings and are reported by
/// validation rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Token returned after registration
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// Account
// ============================================================================

/// Own account, without the password hash
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

impl From<User> for AccountResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            avatar: user.avatar,
            date: user.created_at,
        }
    }
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}
