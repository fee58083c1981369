//! Session token claim
//!
//! The token payload is `{"user":{"id":"<uuid>"},"iat":..,"exp":..}`.

use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::AuthResult;
use platform::token::TokenError;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaim {
    pub user: ClaimSubject,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimSubject {
    pub id: UserId,
}

impl SessionClaim {
    pub fn new(id: UserId) -> Self {
        Self {
            user: ClaimSubject { id },
        }
    }
}

/// Issue a session token for `user_id` valid for the configured TTL
pub fn issue(config: &AuthConfig, user_id: UserId) -> AuthResult<String> {
    let claim = SessionClaim::new(user_id);
    Ok(config.token_codec.issue(&claim, config.token_ttl)?)
}

/// Verify a token as of `now` (unix seconds) and return the user id
pub fn verify_at(config: &AuthConfig, token: &str, now: i64) -> Result<UserId, TokenError> {
    let claim: SessionClaim = config.token_codec.verify_at(token, now)?;
    Ok(claim.user.id)
}
