//! Email Value Object
//!
//! Represents a validated email address. The address is the login
//! identifier and is matched exactly as stored; only surrounding
//! whitespace is removed.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

const INVALID_EMAIL: &str = "Please include a valid email";

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl AsRef<str>) -> AppResult<Self> {
        let email = email.as_ref().trim();

        if email.is_empty() || email.len() > EMAIL_MAX_LENGTH || !Self::is_valid_format(email) {
            return Err(AppError::bad_request(INVALID_EMAIL));
        }

        Ok(Self(email.to_string()))
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if domain.contains('@') {
            return false;
        }

        // Local part checks
        if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
            return false;
        }

        // Domain checks
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains("..")
        {
            return false;
        }

        true
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used to derive the avatar URL
    pub fn avatar_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
